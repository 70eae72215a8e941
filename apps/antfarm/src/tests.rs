//! CLI tests: flag parsing and whole runs over temp files.

#[cfg(test)]
mod helpers {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use crate::Args;

    pub const COLONY: &str = "\
3
##start
start 0 0
mid 1 0
##end
end 2 0
start-mid
mid-end
";

    pub fn colony_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    pub fn args(file: &NamedTempFile, extra: &[&str]) -> Args {
        let path = file.path().to_str().unwrap();
        let mut argv = vec!["antfarm", path];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    pub fn run_to_string(text: &str, extra: &[&str]) -> anyhow::Result<String> {
        let file = colony_file(text);
        let out = crate::run(&args(&file, extra))?;
        Ok(String::from_utf8(out).unwrap())
    }
}

#[cfg(test)]
mod flag_tests {
    use af_core::{DirectTunnel, FarmConfig, SelectionStrategy};
    use clap::Parser;

    use super::helpers::*;
    use crate::{Args, Format};

    #[test]
    fn defaults_match_farm_config() {
        let file = colony_file(COLONY);
        let a = args(&file, &[]);
        assert_eq!(a.format, Format::Text);
        assert_eq!(a.config(), FarmConfig::default());
    }

    #[test]
    fn flags_map_onto_config() {
        let file = colony_file(COLONY);
        let a = args(
            &file,
            &[
                "--selector", "exhaustive", "--exhaustive-limit", "12",
                "--ant-prefix", "A", "--max-ants", "50",
                "--direct-tunnel", "unbounded", "-f", "csv",
            ],
        );
        let config = a.config();
        assert_eq!(config.selection, SelectionStrategy::Exhaustive { max_paths: 12 });
        assert_eq!(config.ant_prefix, "A");
        assert_eq!(config.max_ants, 50);
        assert_eq!(config.direct_tunnel, DirectTunnel::Unbounded);
        assert_eq!(a.format, Format::Csv);
    }

    #[test]
    fn run_head_direct_tunnel_flag() {
        let file = colony_file(COLONY);
        let a = args(&file, &["--direct-tunnel", "run-head"]);
        assert_eq!(a.config().direct_tunnel, DirectTunnel::RunHead);
    }

    #[test]
    fn file_argument_required() {
        assert!(Args::try_parse_from(["antfarm"]).is_err());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(Args::try_parse_from(["antfarm", "x.txt", "--format", "xml"]).is_err());
    }
}

#[cfg(test)]
mod run_tests {
    use super::helpers::*;

    #[test]
    fn echoes_input_then_moves() {
        let out = run_to_string(COLONY, &[]).unwrap();
        let expected = format!("{COLONY}\nL1-mid\nL1-end L2-mid\nL2-end L3-mid\nL3-end\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn echo_adds_missing_newline() {
        let text = COLONY.trim_end();
        let out = run_to_string(text, &[]).unwrap();
        assert!(out.starts_with(&format!("{text}\n\nL1-mid\n")));
    }

    #[test]
    fn moves_only() {
        let out = run_to_string(COLONY, &["--moves-only", "--ant-prefix", "ant"]).unwrap();
        assert_eq!(out, "ant1-mid\nant1-end ant2-mid\nant2-end ant3-mid\nant3-end\n");
    }

    #[test]
    fn csv_rows() {
        let out = run_to_string(COLONY, &["--format", "csv"]).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("turn,ant,room"));
        assert_eq!(lines.next(), Some("1,1,mid"));
        assert_eq!(out.lines().count(), 1 + 6);
    }

    #[test]
    fn json_report() {
        let out = run_to_string(COLONY, &["--format", "json"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["ants"], 3);
        assert_eq!(v["turns"], 4);
        assert_eq!(v["moves"], 6);
        assert_eq!(v["paths"][0]["rooms"], serde_json::json!(["start", "mid", "end"]));
        assert_eq!(v["paths"][0]["ants"], 3);
        assert_eq!(v["transcript"][1], "L1-end L2-mid");
        assert_eq!(v["config"]["ant_prefix"], "L");
    }

    #[test]
    fn writes_output_file() {
        let file = colony_file(COLONY);
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("moves.txt");
        let a = args(&file, &["--moves-only", "-o", target.to_str().unwrap()]);
        let out = crate::run(&a).unwrap();
        crate::emit(&a, &out).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "L1-mid\nL1-end L2-mid\nL2-end L3-mid\nL3-end\n");
    }
}

#[cfg(test)]
mod failure_tests {
    use super::helpers::*;

    #[test]
    fn format_error_message() {
        let err = run_to_string("0\n", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid data format, line 1: number of ants must be positive"
        );
    }

    #[test]
    fn max_ants_flag_applies_to_loader() {
        let err = run_to_string(COLONY, &["--max-ants", "2"]).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum limit of 2"));
    }

    #[test]
    fn disconnected_colony() {
        let err = run_to_string("2\n##start\ns 0 0\n##end\ne 1 0\n", &[]).unwrap_err();
        assert_eq!(err.to_string(), "no valid path found between start and end");
    }

    #[test]
    fn missing_file() {
        let file = colony_file(COLONY);
        let mut a = args(&file, &[]);
        a.file = "/nonexistent/antfarm/colony.txt".into();
        let err = crate::run(&a).unwrap_err();
        assert!(err.to_string().starts_with("opening file /nonexistent/antfarm/colony.txt:"));
    }

    #[test]
    fn bad_config_rejected() {
        let err = run_to_string(COLONY, &["--ant-prefix", "a b"]).unwrap_err();
        assert!(err.to_string().contains("ant prefix"));
    }
}
