use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kinds_are_numbered_from_one() {
    let table = TokenTable::new(["a", "b", "c"]);
    assert_eq!(table.kind_of("a"), TokenKind::new(1));
    assert_eq!(table.kind_of("c"), TokenKind::new(3));
    assert_eq!(table.iter().count(), 3);
}

#[test]
fn unknown_text_is_illegal() {
    let table = TokenTable::dot();
    assert_eq!(table.kind_of("digraph2"), TokenKind::ILLEGAL);
    assert_eq!(table.kind_of(""), TokenKind::ILLEGAL);
    assert_eq!(table.kind_of("INVALID"), TokenKind::ILLEGAL);
}

#[test]
fn duplicates_keep_first_kind() {
    let table = TokenTable::new(["x", "y", "x", "z"]);
    assert_eq!(table.kind_of("x"), TokenKind::new(1));
    assert_eq!(table.kind_of("z"), TokenKind::new(3));
    assert_eq!(table.name(TokenKind::new(4)), None);
}

#[test]
fn name_round_trips_kind() {
    let table = TokenTable::dot();
    for (kind, name) in table.iter() {
        assert_eq!(table.kind_of(name), kind);
        assert_eq!(table.name(kind), Some(name));
    }
    assert_eq!(table.name(TokenKind::ILLEGAL), Some("INVALID"));
    assert_eq!(table.name(TokenKind::new(u16::MAX)), None);
}

#[test]
fn dot_table_layout() {
    let table = TokenTable::dot();
    let names: Vec<&str> = table.iter().map(|(_, name)| name).take(18).collect();
    assert_eq!(
        names,
        vec![
            "$", "ε", ",", "{", "}", ":", ";", "+", "-", "--", "->", "=", "[", "]", "(", ")", "|",
            "/"
        ]
    );
    for required in ["id", "int_lit", "float_lit", "string_lit", "char", "html_lit"] {
        assert!(!table.kind_of(required).is_illegal(), "missing {required}");
    }
}

#[test]
fn dot_keywords_in_three_cases() {
    let table = TokenTable::dot();
    for word in ["strict", "graph", "digraph", "node", "edge", "subgraph"] {
        let upper = word.to_uppercase();
        let capital = format!("{}{}", &upper[..1], &word[1..]);
        for spelling in [word, capital.as_str(), upper.as_str()] {
            assert!(!table.kind_of(spelling).is_illegal(), "missing {spelling}");
        }
    }
    assert!(table.kind_of("dIgraph").is_illegal());
}

#[test]
fn hash_map_is_a_token_map() {
    let mut map = FxHashMap::default();
    map.insert("->".to_string(), TokenKind::new(7));
    assert_eq!(map.kind_of("->"), TokenKind::new(7));
    assert_eq!(map.kind_of("--"), TokenKind::ILLEGAL);
}

#[test]
fn reference_forwards_lookup() {
    let table = TokenTable::dot();
    let by_ref: &dyn TokenMap = &table;
    assert_eq!((&by_ref).kind_of("{"), table.kind_of("{"));
}
