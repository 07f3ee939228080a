//! Unit tests for credential escaping.

use crate::export::domain::escape_credential;
use rstest::rstest;

const RESERVED: [char; 19] = [
    ' ', '!', '#', '$', '&', '\'', '(', ')', '*', '+', ',', '/', ':', ';', '=', '?', '@', '[', ']',
];

#[rstest]
#[case("this has spaces", "this%20has%20spaces")]
#[case("exclaimation_!", "exclaimation_%21")]
#[case("hash_#_dollar_$", "hash_%23_dollar_%24")]
#[case("ampersand_&awesome", "ampersand_%26awesome")]
#[case("single_quote_'_and_another_'", "single_quote_%27_and_another_%27")]
#[case("open_paren_(_close_paren_)", "open_paren_%28_close_paren_%29")]
#[case("asterisk_*_plus_+", "asterisk_%2A_plus_%2B")]
#[case("comma_,slash_/", "comma_%2Cslash_%2F")]
#[case("colon_:semicolon_;", "colon_%3Asemicolon_%3B")]
#[case("equal_=question_?", "equal_%3Dquestion_%3F")]
#[case("at_@", "at_%40")]
#[case("open_bracket_[closed_bracket]", "open_bracket_%5Bclosed_bracket%5D")]
#[case(
    "user:password with $paces@host/name.foo",
    "user%3Apassword%20with%20%24paces%40host%2Fname.foo"
)]
fn reserved_characters_are_percent_encoded(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(escape_credential(input), expected);
}

#[rstest]
#[case("")]
#[case("notpassword")]
#[case("ABCxyz0189")]
#[case("dash-under_score.dot~tilde")]
fn safe_characters_pass_through_unchanged(#[case] input: &str) {
    assert_eq!(escape_credential(input), input);
}

#[rstest]
fn percent_sign_is_escaped_so_encoded_input_is_not_decoded() {
    assert_eq!(escape_credential("already%20encoded"), "already%2520encoded");
}

#[rstest]
#[case("é", "%C3%A9")]
#[case("pass€", "pass%E2%82%AC")]
fn multi_byte_characters_are_escaped_per_byte(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(escape_credential(input), expected);
}

#[rstest]
fn escaped_output_contains_no_reserved_characters() {
    let every_reserved: String = RESERVED.iter().collect();
    let escaped = escape_credential(&format!("prefix {every_reserved} suffix"));

    for reserved in RESERVED {
        assert!(
            !escaped.contains(reserved),
            "'{reserved}' survived escaping in {escaped}"
        );
    }
}

#[rstest]
fn hex_digits_are_uppercase() {
    assert_eq!(escape_credential("*"), "%2A");
    assert_eq!(escape_credential("\n"), "%0A");
}
