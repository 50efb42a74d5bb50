use proptest::prelude::*;
use watch_filter::{should_watch, WatchFilter};

proptest! {
    // Any name that merely starts with "build" is a different directory.
    #[test]
    fn build_prefixed_directories_are_watched(suffix in "[a-z]{1,8}", file in "[a-z]{1,8}\\.js") {
        let path = format!("project/build{}/{}", suffix, file);
        prop_assert!(should_watch(&path));
    }

    #[test]
    fn anything_under_build_is_ignored(depth in 0usize..4, file in "[a-z]{1,8}\\.js") {
        let nested = "sub/".repeat(depth);
        let path = format!("project/build/{}{}", nested, file);
        prop_assert!(!should_watch(&path));
    }

    // A path is ignored exactly when some segment after the first is "build".
    #[test]
    fn ignored_iff_build_is_a_later_segment(
        segments in prop::collection::vec(
            prop::sample::select(vec!["build", "buildtools", "rebuild", "builds", "src", "x.js"]),
            1..6,
        )
    ) {
        let path = segments.join("/");
        let expected = !segments.iter().skip(1).any(|s| *s == "build");
        let filter = WatchFilter::new(["build"]).unwrap();
        prop_assert_eq!(filter.should_watch(&path), expected, "path {}", path);
    }
}

#[test]
fn documented_examples() {
    assert!(!should_watch("project/build/x.js"));
    assert!(should_watch("project/buildtools/x.js"));
    assert!(should_watch("project/src/index.js"));
}
