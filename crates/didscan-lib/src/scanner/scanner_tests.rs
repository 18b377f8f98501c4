use indoc::indoc;

use super::{ScanMiss, Scanner, scan};
use didscan_core::Mode;

fn dump(source: &str) -> String {
    let mut out = String::new();
    for decl in scan(source) {
        out.push_str(&format!(
            "{} {:?} {}({}) -> ({})\n",
            decl.mode, decl.exported_name, decl.fn_name, decl.params, decl.return_text
        ));
    }
    out
}

/// Reasons of every rejected candidate, in source order.
fn misses(source: &str) -> Vec<ScanMiss> {
    let mut scanner = Scanner::new(source);
    let mut out = Vec::new();
    while let Some(attempt) = scanner.next_attempt() {
        if let Err(miss) = attempt {
            out.push(miss.reason);
        }
    }
    out
}

#[test]
fn single_query_without_parameters() {
    let source = indoc! {r#"
        #[candid::candid_method(query, rename = "get_version")]
        async fn get_version() -> (String) {
            call_global_python_function("get_version", vec![]).await.unwrap_or_trap()
        }
    "#};

    insta::assert_snapshot!(dump(source), @r#"query "get_version" get_version() -> (String)"#);
}

#[test]
fn declarations_keep_source_order() {
    let source = indoc! {r#"
        use basilisk_cpython::PyObjectRef;

        #[candid::candid_method(update, rename = "zeta")]
        async fn zeta(value: String) -> () {}

        fn helper(x: u8) -> u8 { x }

        #[derive(Debug)]
        struct Ignored;

        #[candid::candid_method(query, rename = "alpha")]
        async fn alpha(a: Vec<Option<u64>>, b: candid::Principal) -> (Option<Vec<u8>>) {}

        #[candid::candid_method(update, rename = "mid")]
        async fn mid() -> (bool,) {}
    "#};

    insta::assert_snapshot!(dump(source), @r#"
    update "zeta" zeta(value: String) -> ()
    query "alpha" alpha(a: Vec<Option<u64>>, b: candid::Principal) -> (Option<Vec<u8>>)
    update "mid" mid() -> (bool,)
    "#);
}

#[test]
fn nested_parentheses_stay_inside_their_list() {
    let source = indoc! {r#"
        #[candid::candid_method(query, rename = "pair")]
        async fn pair(x: (u8, u16), y: Vec<u8>) -> (Option<()>) {}
    "#};

    insta::assert_snapshot!(dump(source), @r#"query "pair" pair(x: (u8, u16), y: Vec<u8>) -> (Option<()>)"#);
}

#[test]
fn incidental_whitespace_is_allowed() {
    let source = indoc! {r#"
        # [ candid :: candid_method ( update ,rename= "spaced" ) ]


            async   fn   spaced ( ) -> ( ) {}
    "#};

    insta::assert_snapshot!(dump(source), @r#"update "spaced" spaced( ) -> ( )"#);
}

#[test]
fn annotations_in_comments_and_strings_are_ignored() {
    let source = indoc! {r##"
        // #[candid::candid_method(query, rename = "commented")]
        // async fn commented() -> (String) {}

        /* #[candid::candid_method(query, rename = "blocked")]
           async fn blocked() -> (String) {} */

        const DOC: &str = "#[candid::candid_method(query, rename = \"quoted\")] async fn quoted() -> () {}";
    "##};

    assert_eq!(dump(source), "");
}

#[test]
fn quote_inside_comment_closed_by_double_star_stays_inert() {
    let source = indoc! {r#"
        /* say "hi **/
        #[candid::candid_method(query, rename = "a")]
        async fn a() -> (String) {}
    "#};

    insta::assert_snapshot!(dump(source), @r#"query "a" a() -> (String)"#);
}

#[test]
fn comment_between_annotation_and_signature_breaks_adjacency() {
    let source = indoc! {r#"
        #[candid::candid_method(query, rename = "a")]
        // explained
        async fn a() -> () {}
    "#};

    assert_eq!(dump(source), "");
    assert_eq!(misses(source), vec![ScanMiss::NotAsyncFn]);
}

#[test]
fn miss_reasons() {
    let cases = [
        ("#![allow(dead_code)]", ScanMiss::NotAnAttribute),
        ("#[derive(Debug)] struct A;", ScanMiss::NotExportAnnotation),
        ("#[candid::other(query, rename = \"a\")]", ScanMiss::NotExportAnnotation),
        (
            "#[candid::candid_method(composite, rename = \"a\")] async fn a() -> () {}",
            ScanMiss::UnknownMode("composite".into()),
        ),
        (
            "#[candid::candid_method(\"query\", rename = \"a\")] async fn a() -> () {}",
            ScanMiss::UnknownMode(String::new()),
        ),
        ("#[candid::candid_method(query)] async fn a() -> () {}", ScanMiss::MissingRename),
        (
            "#[candid::candid_method(query, name = \"a\")] async fn a() -> () {}",
            ScanMiss::MissingRename,
        ),
        (
            "#[candid::candid_method(query, rename = \"\")] async fn a() -> () {}",
            ScanMiss::MissingExportedName,
        ),
        (
            "#[candid::candid_method(query, rename = a)] async fn a() -> () {}",
            ScanMiss::MissingExportedName,
        ),
        (
            "#[candid::candid_method(query, rename = \"a\", guard = \"g\")] async fn a() -> () {}",
            ScanMiss::UnclosedAnnotation,
        ),
        (
            "#[candid::candid_method(query, rename = \"a\")] pub async fn a() -> () {}",
            ScanMiss::NotAsyncFn,
        ),
        (
            "#[candid::candid_method(query, rename = \"a\")] fn a() -> () {}",
            ScanMiss::NotAsyncFn,
        ),
        (
            "#[candid::candid_method(query, rename = \"a\")] async fn a(x: u8",
            ScanMiss::UnclosedParameters,
        ),
        (
            "#[candid::candid_method(query, rename = \"a\")] async fn a() {}",
            ScanMiss::MissingReturnTuple,
        ),
        (
            "#[candid::candid_method(query, rename = \"a\")] async fn a() -> String {}",
            ScanMiss::MissingReturnTuple,
        ),
        (
            "#[candid::candid_method(query, rename = \"a\")] async fn a() -> (String",
            ScanMiss::UnclosedReturnTuple,
        ),
    ];

    for (source, expected) in cases {
        assert_eq!(misses(source), vec![expected], "source: {source}");
        assert_eq!(dump(source), "", "source: {source}");
    }
}

#[test]
fn miss_does_not_hide_following_declaration() {
    let source = indoc! {r#"
        #[candid::candid_method(query, rename = "a")] fn a() {}
        #[candid::candid_method(query, rename = "b")] async fn b() -> () {}
    "#};

    insta::assert_snapshot!(dump(source), @r#"query "b" b() -> ()"#);
    assert_eq!(misses(source), vec![ScanMiss::NotAsyncFn]);
}

#[test]
fn spans_point_into_source() {
    let source = r#"#[candid::candid_method(update, rename = "set")] async fn set(v: String) -> () {}"#;
    let decl = scan(source).next().unwrap();

    let slice = |range: rowan::TextRange| &source[std::ops::Range::<usize>::from(range)];
    assert_eq!(decl.mode, Mode::Update);
    assert_eq!(slice(decl.name_span), "\"set\"");
    assert_eq!(slice(decl.params_span), "v: String");
    assert_eq!(slice(decl.return_span), "");
    assert!(slice(decl.span).starts_with("#[candid"));
    assert!(slice(decl.span).ends_with("-> ()"));
}

#[test]
fn scanning_is_restartable() {
    let source = indoc! {r#"
        #[candid::candid_method(query, rename = "one")]
        async fn one() -> (u8) {}
        #[candid::candid_method(update, rename = "two")]
        async fn two(x: u8) -> () {}
    "#};

    let mut scanner = scan(source);
    let first: Vec<_> = scanner.by_ref().collect();
    assert!(scanner.next().is_none());

    scanner.reset();
    let second: Vec<_> = scanner.collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);

    let fresh: Vec<_> = scan(source).collect();
    assert_eq!(first, fresh);
}

#[test]
fn empty_source_has_no_declarations() {
    assert_eq!(scan("").count(), 0);
    assert!(misses("").is_empty());
}
