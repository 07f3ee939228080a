//! Unit tests for connection URI construction.

use super::fixtures::config;
use crate::export::domain::{ConnectionUri, ExportConfig};
use rstest::rstest;

#[rstest]
fn basic_uri_has_expected_shape(config: ExportConfig) {
    let uri = ConnectionUri::from_config(&config);

    assert_eq!(uri.as_str(), "vi://me:notpassword@myhost/mydc/host/mycluster");
}

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
fn password_is_escaped_inside_uri(
    config: ExportConfig,
    #[case] password: &str,
    #[case] expected: &str,
) {
    let with_password = ExportConfig {
        password: password.to_owned(),
        ..config
    };

    let uri = ConnectionUri::from_config(&with_password);

    assert_eq!(
        uri.as_str(),
        format!("vi://me:{expected}@myhost/mydc/host/mycluster")
    );
}

#[rstest]
fn username_is_escaped_inside_uri(config: ExportConfig) {
    let with_domain_user = ExportConfig {
        username: "administrator@vsphere.local".to_owned(),
        ..config
    };

    let uri = ConnectionUri::from_config(&with_domain_user);

    assert!(
        uri.as_str()
            .starts_with("vi://administrator%40vsphere.local:notpassword@myhost/")
    );
}

#[rstest]
fn host_datacenter_and_cluster_are_not_escaped(config: ExportConfig) {
    let with_spaces = ExportConfig {
        datacenter: "my dc".to_owned(),
        cluster: "cluster:1".to_owned(),
        ..config
    };

    let uri = ConnectionUri::from_config(&with_spaces);

    assert_eq!(uri.as_str(), "vi://me:notpassword@myhost/my dc/host/cluster:1");
}

#[rstest]
#[case(None)]
#[case(Some(String::new()))]
fn unset_resource_pool_adds_no_suffix(config: ExportConfig, #[case] pool: Option<String>) {
    let without_pool = ExportConfig {
        resource_pool: pool,
        ..config
    };

    let uri = ConnectionUri::from_config(&without_pool);

    assert!(!uri.as_str().contains("/Resources/"));
}

#[rstest]
fn resource_pool_is_appended_last(config: ExportConfig) {
    let with_pool = ExportConfig {
        resource_pool: Some("pool1".to_owned()),
        esxi_host: Some("esxi-01.example.com".to_owned()),
        ..config
    };

    let uri = ConnectionUri::from_config(&with_pool);

    assert_eq!(
        uri.as_str(),
        "vi://me:notpassword@myhost/mydc/host/mycluster/esxi-01.example.com/Resources/pool1"
    );
    assert!(uri.as_str().ends_with("/Resources/pool1"));
}

#[rstest]
fn empty_location_fields_still_form_a_uri() {
    let uri = ConnectionUri::from_config(&ExportConfig::default());

    assert_eq!(uri.as_str(), "vi://:@//host/");
}

#[rstest]
fn redacted_form_and_debug_hide_the_password(config: ExportConfig) {
    let with_secret = ExportConfig {
        password: "s3cr3t!".to_owned(),
        ..config
    };

    let uri = ConnectionUri::from_config(&with_secret);

    assert_eq!(
        uri.redacted(),
        "vi://me:<password>@myhost/mydc/host/mycluster"
    );
    assert!(!format!("{uri:?}").contains("s3cr3t"));
    assert_eq!(uri.to_string(), uri.as_str());
}
