use didscan_lib::EmitConfig;

use super::translate::format_translations;

fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[test]
fn renders_each_token() {
    let types = tokens(&[
        "Vec<u8>",
        "Option<Vec<u64>>",
        "candid::Principal",
        "()",
        "Vec<Option<()>>",
        "MyRecord",
    ]);

    insta::assert_snapshot!(format_translations(&types, &EmitConfig::default()), @r"
    Vec<u8>: blob
    Option<Vec<u64>>: opt vec nat64
    candid::Principal: principal
    (): ()
    Vec<Option<()>>: vec opt text
    MyRecord: text
    ");
}

#[test]
fn placeholder_is_configurable() {
    let config = EmitConfig::new().placeholder("reserved");
    assert_eq!(
        format_translations(&tokens(&["HashMap<String, u8>"]), &config),
        "HashMap<String, u8>: reserved\n"
    );
}
