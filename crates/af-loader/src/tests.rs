//! Tests for the colony loader.

#[cfg(test)]
mod helpers {
    use crate::{GraphLoader, LoadError, LoadResult, LoadedFarm};

    pub const SIMPLE: &str = "\
3
##start
start 0 0
mid 1 0
##end
end 2 0
start-mid
mid-end
";

    pub fn load(text: &str) -> LoadResult<LoadedFarm> {
        GraphLoader::default().load_str(text)
    }

    /// Unwrap a per-line format error into `(line, reason)`.
    pub fn format_err(text: &str) -> (usize, String) {
        match load(text) {
            Err(LoadError::Format { line, reason }) => (line, reason),
            Err(other) => panic!("expected a format error, got {other}"),
            Ok(_) => panic!("expected a format error, got a colony"),
        }
    }
}

#[cfg(test)]
mod valid_input {
    use std::io::Write;

    use super::helpers::*;
    use crate::GraphLoader;

    #[test]
    fn simple_colony() {
        let farm = load(SIMPLE).unwrap();
        let c = &farm.colony;
        assert_eq!(farm.ant_count, 3);
        assert_eq!(c.room_count(), 3);
        assert_eq!(c.tunnel_count(), 2);
        assert_eq!(c.name(c.start()), "start");
        assert_eq!(c.name(c.end()), "end");
        let mid = c.find("mid").unwrap();
        assert!(c.are_adjacent(c.start(), mid));
        assert!(c.are_adjacent(mid, c.end()));
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let text = "\
\n2\n\
# a comment\n\
##start\n\
# comment between command and room\n\
a 0 0\n\
\n\
##unknown\n\
##end\n\
b 5 5\n\
a-b\n\
# trailing comment\n";
        let farm = load(text).unwrap();
        assert_eq!(farm.ant_count, 2);
        assert_eq!(farm.colony.name(farm.colony.start()), "a");
        assert_eq!(farm.colony.name(farm.colony.end()), "b");
    }

    #[test]
    fn negative_coordinates_are_rooms() {
        let farm = load("1\n##start\ns -1 -2\n##end\ne 3 -4\ns-e\n").unwrap();
        let c = &farm.colony;
        assert_eq!(c.coord(c.start()).x, -1);
        assert_eq!(c.coord(c.end()).y, -4);
    }

    #[test]
    fn end_before_start_is_fine() {
        let farm = load("1\n##end\nz 0 0\n##start\na 1 1\na-z\n").unwrap();
        assert_eq!(farm.colony.name(farm.colony.start()), "a");
    }

    #[test]
    fn disconnected_colony_still_loads() {
        let farm = load("1\n##start\ns 0 0\n##end\ne 1 0\n").unwrap();
        assert_eq!(farm.colony.tunnel_count(), 0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(SIMPLE.as_bytes()).unwrap();
        let farm = GraphLoader::default().load_path(file.path()).unwrap();
        assert_eq!(farm.ant_count, 3);
    }

    #[test]
    fn custom_ant_limit() {
        assert!(GraphLoader::new(2).load_str(SIMPLE).is_err());
        assert!(GraphLoader::new(3).load_str(SIMPLE).is_ok());
    }
}

#[cfg(test)]
mod invalid_input {
    use super::helpers::*;
    use crate::{GraphLoader, LoadError};
    use af_colony::ColonyError;

    #[test]
    fn empty_file() {
        assert!(matches!(load(""), Err(LoadError::Empty)));
        assert!(matches!(load("\n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn bad_ant_counts() {
        for text in ["abc\n", "0\n", "-3\n", "10001\n", "# comment first\n3\n"] {
            let (line, _) = format_err(text);
            assert_eq!(line, 1, "{text:?}");
        }
        let (_, reason) = format_err("0\n");
        assert!(reason.contains("positive"));
        let (_, reason) = format_err("10001\n");
        assert!(reason.contains("maximum"));
    }

    #[test]
    fn bad_room_lines() {
        let (line, reason) = format_err("1\n##start\ns 0\n");
        assert_eq!(line, 3);
        assert!(reason.contains("room format"));

        let (_, reason) = format_err("1\n##start\ns x 0\n");
        assert!(reason.contains("coordinates"));

        let (_, reason) = format_err("1\n##start\ns 0 0\ns 1 1\n");
        assert!(reason.contains("duplicate room"));
    }

    #[test]
    fn multiple_start_rooms() {
        let (line, reason) = format_err("1\n##start\na 0 0\n##start\nb 0 0\n");
        assert_eq!(line, 5);
        assert!(reason.contains("multiple start"));
    }

    #[test]
    fn start_and_end_on_one_room() {
        let (line, _) = format_err("1\n##start\n##end\na 0 0\n");
        assert_eq!(line, 4);
    }

    #[test]
    fn bad_tunnels() {
        let base = "1\n##start\ns 0 0\n##end\ne 1 0\n";

        let (line, reason) = format_err(&format!("{base}s-e-x\n"));
        assert_eq!(line, 6);
        assert!(reason.contains("tunnel format"));

        let (_, reason) = format_err(&format!("{base}s-\n"));
        assert!(reason.contains("tunnel format"));

        let (_, reason) = format_err(&format!("{base}s-s\n"));
        assert!(reason.contains("itself"));

        let (_, reason) = format_err(&format!("{base}s-q\n"));
        assert!(reason.contains("does not exist"));

        let (line, reason) = format_err(&format!("{base}s-e\ne-s\n"));
        assert_eq!(line, 7);
        assert!(reason.contains("duplicate tunnel"));
    }

    #[test]
    fn room_after_tunnels() {
        let (line, reason) = format_err("1\n##start\ns 0 0\n##end\ne 1 0\ns-e\nx 2 2\n");
        assert_eq!(line, 7);
        assert!(reason.contains("after tunnels"));
    }

    #[test]
    fn missing_start_or_end() {
        assert!(matches!(
            load("1\na 0 0\n##end\ne 1 0\na-e\n"),
            Err(LoadError::Colony(ColonyError::MissingStart))
        ));
        assert!(matches!(
            load("1\n##start\ns 0 0\ne 1 0\ns-e\n"),
            Err(LoadError::Colony(ColonyError::MissingEnd))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = GraphLoader::default()
            .load_path(std::path::Path::new("/nonexistent/antfarm/colony.txt"))
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn messages_carry_format_prefix() {
        let err = load("1\n##start\ns 0\n").err().unwrap();
        assert!(err.to_string().starts_with("invalid data format, line 3:"));
    }
}
