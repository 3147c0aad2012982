use serde::{Deserialize, Serialize};
use serde_hocon::{
    from_reader, from_str, from_str_with_options, parse, Error, HoconMap, HoconOptions, Value,
};
use std::collections::HashMap;
use std::io::Cursor;
use std::time::Duration;

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct Connection {
    host: String,
    port: u16,
    timeout: Duration,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct Cluster {
    name: String,
    connection: Connection,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct Root {
    cluster: Cluster,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
struct Imdg {
    name: String,
    #[serde(rename = "member-count")]
    member_count: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
struct Axlrate {
    imdg: Imdg,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
#[serde(default)]
struct Document {
    name: String,
    axlrate: Axlrate,
}

#[test]
fn test_nested_blocks_on_one_line() {
    let doc = r#"Cluster { Name = "x" Connection { Host = "1.2.3.4" Port = 10080 Timeout = 10 seconds } }"#;
    let root: Root = from_str(doc).unwrap();
    assert_eq!(
        root,
        Root {
            cluster: Cluster {
                name: "x".to_string(),
                connection: Connection {
                    host: "1.2.3.4".to_string(),
                    port: 10080,
                    timeout: Duration::from_secs(10),
                },
            },
        }
    );
}

#[test]
fn test_nested_blocks_across_lines() {
    let doc = r#"
name = "axlrate"
axlrate {
    imdg {
        name = "axlrate-imdg"
        member-count = 10
    }
}
"#;
    let document: Document = from_str(doc).unwrap();
    assert_eq!(document.name, "axlrate");
    assert_eq!(document.axlrate.imdg.name, "axlrate-imdg");
    assert_eq!(document.axlrate.imdg.member_count, 10);
}

#[test]
fn test_assignment_forms_are_equivalent() {
    let expected: Value = from_str("a { b = 1 }").unwrap();
    for doc in ["a = { b = 1 }", "a: { b = 1 }", "a { b: 1 }", "a.b = 1"] {
        let value: Value = from_str(doc).unwrap();
        assert_eq!(value, expected, "document: {doc}");
    }
}

#[test]
fn test_dotted_paths_merge_into_blocks() {
    let doc = "a { b = 10 }\na.c = 20\na.b = 30";
    let map: HashMap<String, HashMap<String, i64>> = from_str(doc).unwrap();
    assert_eq!(map["a"]["b"], 30);
    assert_eq!(map["a"]["c"], 20);
}

#[test]
fn test_repeated_key_keeps_last_value() {
    #[derive(Deserialize, Debug)]
    struct Counter {
        count: i32,
    }
    let counter: Counter = from_str("count = 1\ncount = 2\ncount = 3").unwrap();
    assert_eq!(counter.count, 3);
}

#[test]
fn test_quoted_key_is_not_split() {
    let map: HashMap<String, String> = from_str(r#""a.b" = dotted"#).unwrap();
    assert_eq!(map["a.b"], "dotted");
}

#[test]
fn test_array_separators() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Lists {
        commas: Vec<i32>,
        blanks: Vec<i32>,
        lines: Vec<String>,
        mixed: (i32, String, bool),
    }

    let doc = "commas = [1, 2, 3]\nblanks = [1 2 3]\nlines = [\n  alpha\n  beta\n]\nmixed = [7, seven, true]";
    let lists: Lists = from_str(doc).unwrap();
    assert_eq!(lists.commas, vec![1, 2, 3]);
    assert_eq!(lists.blanks, vec![1, 2, 3]);
    assert_eq!(lists.lines, vec!["alpha", "beta"]);
    assert_eq!(lists.mixed, (7, "seven".to_string(), true));
}

#[test]
fn test_arrays_of_units_and_objects() {
    #[derive(Deserialize, Debug)]
    struct Member {
        host: String,
        #[serde(default)]
        backup: bool,
    }

    #[derive(Deserialize, Debug)]
    struct Topology {
        retries: Vec<Duration>,
        members: Vec<Member>,
        grid: Vec<Vec<u8>>,
    }

    let doc = r#"
retries = [100 ms, 1 second, 5 seconds]
members = [
    { host = node-1 }
    { host = node-2, backup = true }
]
grid = [[1, 2], [3]]
"#;
    let topology: Topology = from_str(doc).unwrap();
    assert_eq!(
        topology.retries,
        vec![
            Duration::from_millis(100),
            Duration::from_secs(1),
            Duration::from_secs(5)
        ]
    );
    assert_eq!(topology.members.len(), 2);
    assert_eq!(topology.members[1].host, "node-2");
    assert!(topology.members[1].backup);
    assert!(!topology.members[0].backup);
    assert_eq!(topology.grid, vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_blank_separators_after_nested_elements() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        a: i32,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Nested {
        grid: Vec<Vec<i32>>,
        items: Vec<Item>,
        mixed: (Item, String),
    }

    let blanks = "grid = [[1] [2]]\nitems = [{a = 1} {a = 2}]\nmixed = [{a = 1} two]";
    let commas = "grid = [[1], [2]]\nitems = [{a = 1}, {a = 2}]\nmixed = [{a = 1}, two]";
    let blanks: Nested = from_str(blanks).unwrap();
    let commas: Nested = from_str(commas).unwrap();
    assert_eq!(blanks, commas);
    assert_eq!(blanks.grid, vec![vec![1], vec![2]]);
    assert_eq!(blanks.mixed.1, "two");
}

#[test]
fn test_unit_literals_without_commas() {
    #[derive(Deserialize, Debug)]
    struct Schedule {
        backoff: Vec<Duration>,
        buffers: Vec<u64>,
    }

    let doc = "backoff = [1 s 2 s 500ms]\nbuffers = [1 kb 2 kb]";
    let schedule: Schedule = from_str(doc).unwrap();
    assert_eq!(
        schedule.backoff,
        vec![
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_millis(500)
        ]
    );
    assert_eq!(schedule.buffers, vec![1024, 2048]);
}

#[test]
fn test_unquoted_values_concatenate() {
    #[derive(Deserialize, Debug)]
    struct Paths {
        title: String,
        log: String,
        url: String,
    }

    let doc = "title = axlrate in memory grid   \nlog = /var/log/axlrate.log\nurl = http\n";
    let paths: Paths = from_str(doc).unwrap();
    assert_eq!(paths.title, "axlrate in memory grid");
    assert_eq!(paths.log, "/var/log/axlrate.log");
    assert_eq!(paths.url, "http");
}

#[test]
fn test_comments_are_ignored() {
    let doc = r#"
# leading comment
name = "axlrate-imdg"     # trailing hash comment
axlrate { // block comment
    # Another comment
    // * # this character would be invalid outside a comment
    imdg {
        name = "axlrate-imdg"
        member-count = 3 // members
    }
}
"#;
    let document: Document = from_str(doc).unwrap();
    assert_eq!(document.name, "axlrate-imdg");
    assert_eq!(document.axlrate.imdg.member_count, 3);
}

#[test]
fn test_multiline_string_is_verbatim() {
    #[derive(Deserialize, Debug)]
    struct Banner {
        text: String,
    }

    let doc = "text = \"\"\"\nline1\n  \"line2\"\n\"\"\"";
    let banner: Banner = from_str(doc).unwrap();
    assert_eq!(banner.text, "\nline1\n  \"line2\"\n");
}

#[test]
fn test_quoted_string_escapes() {
    let map: HashMap<String, String> = from_str(r#"s = "tab\there \"q\" A""#).unwrap();
    assert_eq!(map["s"], "tab\there \"q\" A");
}

#[test]
fn test_sizes_bind_as_bytes() {
    #[derive(Deserialize, Debug)]
    struct Memory {
        heap: u64,
        page: u32,
        buffer: usize,
    }

    let memory: Memory = from_str("heap = 2 GB\npage = 4kb\nbuffer = 512 bytes").unwrap();
    assert_eq!(memory.heap, 2 * 1024 * 1024 * 1024);
    assert_eq!(memory.page, 4096);
    assert_eq!(memory.buffer, 512);
}

#[test]
fn test_durations_bind_as_nanoseconds() {
    #[derive(Deserialize, Debug)]
    struct Raw {
        heartbeat: u64,
        idle: Duration,
    }

    let raw: Raw = from_str("heartbeat = 5 ms\nidle = 1 week").unwrap();
    assert_eq!(raw.heartbeat, 5_000_000);
    assert_eq!(raw.idle, Duration::from_secs(7 * 24 * 60 * 60));
}

#[test]
fn test_negative_duration_is_rejected() {
    let result: Result<Value, Error> = from_str("timeout = -5 seconds");
    assert!(matches!(result, Err(Error::InvalidDuration { line: 1, col: 11, .. })));
}

#[test]
fn test_optional_and_defaulted_fields() {
    #[derive(Deserialize, Debug)]
    struct Settings {
        name: Option<String>,
        port: Option<u16>,
        #[serde(default = "default_workers")]
        workers: usize,
    }

    fn default_workers() -> usize {
        4
    }

    let settings: Settings = from_str("name = api").unwrap();
    assert_eq!(settings.name.as_deref(), Some("api"));
    assert_eq!(settings.port, None);
    assert_eq!(settings.workers, 4);
}

#[test]
fn test_field_aliases() {
    #[derive(Deserialize, Debug)]
    struct Server {
        #[serde(alias = "listen-port", alias = "Port")]
        port: u16,
    }

    let server: Server = from_str("listen-port = 9000").unwrap();
    assert_eq!(server.port, 9000);
    let server: Server = from_str("Port = 9001").unwrap();
    assert_eq!(server.port, 9001);
}

#[test]
fn test_lenient_mode_skips_unknown_blocks() {
    #[derive(Deserialize, Debug)]
    struct Only {
        keep: bool,
    }

    let doc = "legacy { nested { deep = [1, 2] } }\nkeep = true\nextra = 10 seconds";
    let only: Only = from_str(doc).unwrap();
    assert!(only.keep);
}

#[test]
fn test_strict_mode_reports_nested_unknown_key() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Inner {
        a: i32,
    }

    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Outer {
        inner: Inner,
    }

    let doc = "inner {\n  a = 1\n  b = 2\n}";
    assert!(from_str::<Outer>(doc).is_ok());
    let err = from_str_with_options::<Outer>(doc, HoconOptions::strict()).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidInputField {
            line: 3,
            col: 3,
            field: "b".to_string()
        }
    );
}

#[test]
fn test_unterminated_literal() {
    let result: Result<Value, Error> = from_str(r#"name = "axlrate-"#);
    assert!(matches!(result, Err(Error::Scanner { line: 1, col: 8, .. })));
}

#[test]
fn test_unrecognized_token_location() {
    let doc = "\n\t{\n\t\t*\n\t\tname = \"axlrate\"\n\t}\n\t";
    let result: Result<Value, Error> = from_str(doc);
    assert!(matches!(result, Err(Error::InvalidToken { line: 3, col: 3, .. })));
}

#[test]
fn test_commented_out_closer_is_unbalanced() {
    let doc = r#"
	name = "axlrate-imdg"
	axlrate { # Main block
	name = "axlrate-imdg"
	imdg {
		timeout = 10 seconds # number of seconds
		name = "axlrate-imdg"
	}
//}"#;
    let result: Result<Value, Error> = from_str(doc);
    assert_eq!(result, Err(Error::UnbalancedParentheses { line: 3, col: 10 }));
}

#[test]
fn test_array_outside_value_position() {
    let result: Result<Value, Error> = from_str("a [1, 2]");
    assert_eq!(result, Err(Error::InvalidArray { line: 1, col: 3 }));
}

#[test]
fn test_closer_after_assignment() {
    let result: Result<Value, Error> = from_str("a { b = }");
    assert!(matches!(result, Err(Error::InvalidToken { line: 1, col: 7, .. })));
}

#[test]
fn test_conversion_error_location() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Port {
        port: u16,
    }

    let err = from_str::<Port>("\nport = eighty").unwrap_err();
    assert!(matches!(err, Error::Conversion { line: 2, col: 8, .. }));
    assert!(err.to_string().contains("line 2, column 8"));
}

#[test]
fn test_parse_into_existing_destination() {
    let mut document = Document::default();
    parse(Some(Cursor::new("name = first")), &mut document).unwrap();
    assert_eq!(document.name, "first");

    let broken = "name = second\naxlrate { imdg { name = x ";
    assert!(parse(Some(Cursor::new(broken)), &mut document).is_err());
    assert_eq!(document.name, "first");

    assert_eq!(parse(None::<Cursor<&str>>, &mut document), Err(Error::SourceNil));
}

#[test]
fn test_parse_keeps_fields_the_document_omits() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Endpoint {
        name: String,
        port: u16,
        timeout: Duration,
    }

    let mut endpoint = Endpoint {
        name: "keep".to_string(),
        port: 7,
        timeout: Duration::from_secs(3),
    };
    parse(Some(Cursor::new("port = 9")), &mut endpoint).unwrap();
    assert_eq!(
        endpoint,
        Endpoint {
            name: "keep".to_string(),
            port: 9,
            timeout: Duration::from_secs(3),
        }
    );

    let mut document = Document {
        name: "keep".to_string(),
        axlrate: Axlrate {
            imdg: Imdg {
                name: "grid".to_string(),
                member_count: 3,
            },
        },
    };
    parse(Some(Cursor::new("axlrate.imdg.member-count = 5")), &mut document).unwrap();
    assert_eq!(document.name, "keep");
    assert_eq!(document.axlrate.imdg.name, "grid");
    assert_eq!(document.axlrate.imdg.member_count, 5);
}

#[test]
fn test_from_reader_bytes() {
    let map: HoconMap = from_reader(Cursor::new(b"a = 1\nb = two".to_vec())).unwrap();
    assert_eq!(map.get("a"), Some(&Value::from(1)));
    assert_eq!(map.get("b"), Some(&Value::from("two")));
}

#[test]
fn test_serde_json_value_as_sink() {
    let doc = "service { name = api, port = 8080, tags = [a, b], ratio = 0.5, on = true }";
    let json: serde_json::Value = from_str(doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "service": {
                "name": "api",
                "port": 8080,
                "tags": ["a", "b"],
                "ratio": 0.5,
                "on": true
            }
        })
    );
}

#[test]
fn test_value_round_trip_through_json() {
    let value: Value = from_str("a { b = [1, 2.5, x] }\nc = false").unwrap();
    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(json["a"]["b"][1], serde_json::json!(2.5));
    let back: Value = serde_json::from_value(json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_root_must_be_an_object() {
    assert!(matches!(from_str::<i32>("a = 1"), Err(Error::InvalidTarget(_))));
    assert!(matches!(from_str::<String>("a = 1"), Err(Error::InvalidTarget(_))));
}

#[test]
fn test_empty_document() {
    #[derive(Deserialize, Debug, Default)]
    struct Empty {}

    let map: HoconMap = from_str("").unwrap();
    assert!(map.is_empty());
    let map: HoconMap = from_str("# only a comment\n\n").unwrap();
    assert!(map.is_empty());
    from_str::<Empty>("   ").unwrap();
}
