pub mod core {
    pub mod car;
    pub mod handle_sim;
    pub mod ring;
    pub mod simulation;
}
pub mod interfaces {
    pub mod gui_interface;
}
pub mod post {
    pub mod sim_result;
    pub mod telemetry;
}
pub mod pre {
    pub mod check_sim_opts_pars;
    pub mod read_sim_pars;
    pub mod sim_opts;
}





#[cfg(test)]
mod telemetry_tests {
    use crate::post::telemetry::{TelemetryRecord, TelemetryRecorder};
    use crate::test_utils::{create_sim, get_quiet_traffic_pars, get_tmp_path};
    use std::fs;

    #[test]
    fn test_flush_and_read_back() {
        let mut sim = create_sim(&Default::default(), 13);

        for _ in 0..100 {
            sim.simulate_tick();
        }

        let filepath = get_tmp_path("roundtrip");
        sim.telemetry.flush(&filepath).unwrap();
        let telemetry = TelemetryRecorder::from_csv(&filepath).unwrap();
        fs::remove_file(&filepath).unwrap();

        assert_eq!(telemetry.records(), sim.telemetry.records());
    }
    #[test]
    fn test_flush_file_format() {
        let mut sim = create_sim(&get_quiet_traffic_pars(), 14);
        sim.simulate_tick();

        let filepath = get_tmp_path("format");
        sim.telemetry.flush(&filepath).unwrap();
        let content = fs::read_to_string(&filepath).unwrap();
        fs::remove_file(&filepath).unwrap();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "time,car_id,angle,speed,x,y");
        assert!(lines[1].starts_with("0,0,1.0,1.0,"));
        assert!(lines[2].starts_with("0,1,37.0,1.0,"));

        // position of car 0 after moving by 1deg
        let vals: Vec<f64> = lines[1].split(',').map(|val| val.parse().unwrap()).collect();
        assert!((vals[4] - (500.0 + 400.0 * 1.0_f64.to_radians().cos())).abs() < 1e-9);
        assert!((vals[5] - (500.0 + 400.0 * 1.0_f64.to_radians().sin())).abs() < 1e-9);
    }
    #[test]
    fn test_flush_empty_log_writes_header() {
        let filepath = get_tmp_path("empty");
        TelemetryRecorder::new().flush(&filepath).unwrap();
        let content = fs::read_to_string(&filepath).unwrap();
        let telemetry = TelemetryRecorder::from_csv(&filepath).unwrap();
        fs::remove_file(&filepath).unwrap();

        assert_eq!(content.trim_end(), "time,car_id,angle,speed,x,y");
        assert!(telemetry.is_empty());
    }
    #[test]
    fn test_flush_to_missing_directory_fails() {
        let filepath = std::env::temp_dir()
            .join("ringsim_missing_dir_for_tests")
            .join("telemetry.csv");
        let err = TelemetryRecorder::new().flush(&filepath).unwrap_err();
        assert!(err.to_string().contains("Failed to create telemetry file"));
    }
    #[test]
    fn test_read_malformed_file_fails() {
        let filepath = get_tmp_path("malformed");
        fs::write(&filepath, "time,car_id,angle,speed,x,y\n0,zero,0.0,1.0,900.0,500.0\n").unwrap();
        let result = TelemetryRecorder::from_csv(&filepath);
        fs::remove_file(&filepath).unwrap();

        assert!(result.is_err());
    }
    #[test]
    fn test_records_keep_exact_floats() {
        let filepath = get_tmp_path("floats");
        let mut sim = create_sim(&Default::default(), 15);
        sim.cars_list[0].angle = 0.1 + 0.2;
        sim.cars_list[0].speed = 1e-7;
        sim.telemetry.record(42, &sim.cars_list, &sim.ring);
        sim.telemetry.flush(&filepath).unwrap();
        let telemetry = TelemetryRecorder::from_csv(&filepath).unwrap();
        fs::remove_file(&filepath).unwrap();

        let record: &TelemetryRecord = &telemetry.records()[0];
        assert_eq!(record.time, 42);
        assert_eq!(record.angle, 0.1 + 0.2);
        assert_eq!(record.speed, 1e-7);
    }
}



#[cfg(test)]
mod check_sim_opts_pars_tests {
    use crate::core::ring::RingPars;
    use crate::core::simulation::TrafficPars;
    use crate::interfaces::gui_interface::VisualPars;
    use crate::pre::check_sim_opts_pars::{
        check_ring_pars, check_sim_opts, check_sim_opts_pars, check_traffic_pars,
        check_visual_pars,
    };
    use crate::pre::read_sim_pars::{get_sim_pars, read_sim_pars, SimPars};
    use crate::pre::sim_opts::SimOpts;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn test_defaults_are_valid() {
        let sim_opts = SimOpts::parse_from(["ringsim"]);
        assert!(check_sim_opts_pars(&sim_opts, &SimPars::default()).is_ok());
    }
    #[test]
    fn test_sim_opts_parsing() {
        let sim_opts = SimOpts::parse_from([
            "ringsim",
            "--headless",
            "--realtime",
            "-n",
            "120",
            "-s",
            "7",
            "-f",
            "30",
        ]);
        assert!(sim_opts.headless && sim_opts.realtime);
        assert_eq!(sim_opts.no_ticks, 120);
        assert_eq!(sim_opts.seed, Some(7));
        assert_eq!(sim_opts.tick_rate, 30);
        assert!(sim_opts.parfile_path.is_none());
    }
    #[test]
    fn test_realtime_requires_headless() {
        assert!(SimOpts::try_parse_from(["ringsim", "--realtime"]).is_err());
    }
    #[test]
    fn test_invalid_sim_opts() {
        assert!(check_sim_opts(&SimOpts::parse_from(["ringsim", "-f", "0"])).is_err());
        assert!(check_sim_opts(&SimOpts::parse_from(["ringsim", "-r", "500"])).is_err());
        assert!(check_sim_opts(&SimOpts::parse_from(["ringsim", "--headless", "-n", "0"])).is_err());
    }
    #[test]
    fn test_invalid_ring_pars() {
        let invalid_pars = [
            RingPars {
                radius: -1.0,
                ..Default::default()
            },
            RingPars {
                width: 0,
                ..Default::default()
            },
            RingPars {
                road_half_width: 400.0,
                ..Default::default()
            },
        ];
        for ring_pars in invalid_pars.iter() {
            assert!(check_ring_pars(ring_pars).is_err());
        }
    }
    #[test]
    fn test_invalid_traffic_pars() {
        let invalid_pars = [
            TrafficPars {
                no_cars: 0,
                ..Default::default()
            },
            TrafficPars {
                collision_distance: 0.0,
                ..Default::default()
            },
            TrafficPars {
                min_fluctuation: 0.3,
                max_fluctuation: 0.2,
                ..Default::default()
            },
            TrafficPars {
                fast_speed: f64::NAN,
                ..Default::default()
            },
            TrafficPars {
                fluctuation_interval: 0,
                ..Default::default()
            },
            TrafficPars {
                speed_change_interval: 0,
                ..Default::default()
            },
            TrafficPars {
                speed_change_interval_range: [0, 600],
                ..Default::default()
            },
            TrafficPars {
                speed_change_interval_range: [600, 400],
                ..Default::default()
            },
            TrafficPars {
                reset_speed_interval_range: [200, 100],
                ..Default::default()
            },
        ];
        for traffic_pars in invalid_pars.iter() {
            assert!(check_traffic_pars(traffic_pars).is_err());
        }
    }
    #[test]
    fn test_invalid_visual_pars() {
        let invalid_pars = [
            VisualPars {
                filenames: vec![],
                ..Default::default()
            },
            VisualPars {
                visual_width: 0,
                ..Default::default()
            },
            VisualPars {
                color_road: String::from("#12345"),
                ..Default::default()
            },
        ];
        for visual_pars in invalid_pars.iter() {
            assert!(check_visual_pars(visual_pars).is_err());
        }
    }
    #[test]
    fn test_parameter_file_matches_defaults() {
        let filepath = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("input")
            .join("parameters")
            .join("pars_ring_road.json");
        let sim_pars = read_sim_pars(&filepath).unwrap();
        let sim_pars_default = SimPars::default();

        assert_eq!(sim_pars.ring_pars.width, sim_pars_default.ring_pars.width);
        assert_eq!(sim_pars.ring_pars.radius, sim_pars_default.ring_pars.radius);
        assert_eq!(
            sim_pars.traffic_pars.no_cars,
            sim_pars_default.traffic_pars.no_cars
        );
        assert_eq!(
            sim_pars.traffic_pars.speed_change_interval_range,
            sim_pars_default.traffic_pars.speed_change_interval_range
        );
        assert_eq!(
            sim_pars.visual_pars.filenames,
            sim_pars_default.visual_pars.filenames
        );
    }
    #[test]
    fn test_missing_parameter_file() {
        let err = get_sim_pars(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to open parameter file"));
        assert!(get_sim_pars(None).is_ok());
    }
}
