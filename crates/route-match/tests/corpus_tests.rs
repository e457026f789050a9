/// Table-driven cases shared with other ports of this matcher
///
/// Each case lists the path, the template and the expected outcome as
/// `(params, rest)` pairs, or `None` for no-match. Keeping them in one table
/// makes behavior drift between ports easy to spot.

use pretty_assertions::assert_eq;
use rstest::rstest;
use route_match::{match_path, Matches, Params};

fn expect(pairs: &[(&str, &str)], rest: Option<&str>) -> Option<Matches> {
    let params: Params = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Some(Matches {
        params,
        rest: rest.map(str::to_string),
    })
}

#[rstest]
// Base routes
#[case::base_exact("/", "/", expect(&[], None))]
#[case::base_no_match("/user/1", "/", None)]
// Param routes
#[case::param_match("/user/2", "/user/:id", expect(&[("id", "2")], None))]
#[case::param_no_match("/", "/user/:id", None)]
// Anonymous rest
#[case::rest_single("/user/foo", "/user/*", expect(&[], Some("/foo")))]
#[case::rest_multiple("/user/foo/bar/baz", "/user/*", expect(&[], Some("/foo/bar/baz")))]
#[case::param_rest_single("/user/2/foo", "/user/:id/*", expect(&[("id", "2")], Some("/foo")))]
#[case::param_rest_multiple(
    "/user/2/foo/bar/bob",
    "/user/:id/*",
    expect(&[("id", "2")], Some("/foo/bar/bob"))
)]
#[case::param_rest_no_match("/", "/user/:id/*", None)]
#[case::wildcard_only("/anything/goes/here", "*", expect(&[], Some("/anything/goes/here")))]
// Optional params
#[case::optional_empty("/user", "/user/:id?", expect(&[("id", "")], None))]
#[case::optional_no_match("/", "/user/:id?", None)]
#[case::optional_rest_empty("/user", "/user/:id*", expect(&[("id", "")], None))]
#[case::optional_rest_segments("/user/foo/bar", "/user/:id*", expect(&[("id", "foo/bar")], None))]
#[case::optional_rest_no_match("/", "/user/:id*", None)]
// Required rest
#[case::required_rest_single("/user/foo", "/user/:id+", expect(&[("id", "foo")], None))]
#[case::required_rest_multiple("/user/foo/bar", "/user/:id+", expect(&[("id", "foo/bar")], None))]
#[case::required_rest_empty("/user", "/user/:id+", None)]
#[case::required_rest_root("/", "/user/:id+", None)]
// Slashes
#[case::trailing_slashes(
    "/about-late/_SEGMENT1_/_SEGMENT2_/",
    "/about-late/:seg1/:seg2/",
    expect(&[("seg1", "_SEGMENT1_"), ("seg2", "_SEGMENT2_")], None)
)]
#[case::path_slashes("//user//123//", "/user/:id", expect(&[("id", "123")], None))]
#[case::template_slashes("/user/123", "//user//:id//", expect(&[("id", "123")], None))]
#[case::empty_middle_segments("/api//v1//users", "/api/v1/users", expect(&[], None))]
// Encoding
#[case::encoded_space("/foo/bar%20baz", "/foo/:param", expect(&[("param", "bar baz")], None))]
#[case::encoded_email(
    "/users/test%40example.com/posts",
    "/users/:userId/posts",
    expect(&[("userId", "test@example.com")], None)
)]
#[case::encoded_rest(
    "/api/path/with%20spaces/and%2Fslashes",
    "/api/:path+",
    expect(&[("path", "path/with spaces/and/slashes")], None)
)]
#[case::encoded_special(
    "/search/query%3F%2B%23%26test",
    "/search/:query",
    expect(&[("query", "query?+#&test")], None)
)]
#[case::encoded_unicode("/user/Jos%C3%A9", "/user/:name", expect(&[("name", "José")], None))]
// Edge cases
#[case::empty_route("/foo", "", None)]
#[case::empty_url_with_param("", "/:param", None)]
#[case::mixed_optional_present(
    "/foo/bar",
    "/:required/:optional?",
    expect(&[("required", "foo"), ("optional", "bar")], None)
)]
#[case::mixed_optional_missing(
    "/foo",
    "/:required/:optional?",
    expect(&[("required", "foo"), ("optional", "")], None)
)]
#[case::route_longer_required("/api", "/api/:version/:resource", None)]
#[case::route_longer_optional("/api", "/api/:version?", expect(&[("version", "")], None))]
fn test_corpus(#[case] path: &str, #[case] template: &str, #[case] expected: Option<Matches>) {
    assert_eq!(match_path(path, template), expected);
}

#[rstest]
#[case::trailing_percent("/user/test%", "/user/:id")]
#[case::trailing_percent_in_rest("/files/test%/file", "/files/:path+")]
#[case::truncated_utf8("/user/test%C3", "/user/:id")]
#[case::bad_hex("/user/%zz", "/user/:id")]
#[case::lone_percent("/%", "/:id")]
fn test_malformed_encoding_keeps_raw_text(#[case] path: &str, #[case] template: &str) {
    let m = match_path(path, template).unwrap();
    let bound = m.params.values().next().unwrap();
    assert!(bound.contains('%'), "expected raw fallback for {path:?}, got {bound:?}");
}
