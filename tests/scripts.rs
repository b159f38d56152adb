use std::fs;

use normal::run;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "normal"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        let printed = run(&source).iter()
                                  .filter_map(normal::ScriptLine::output)
                                  .collect::<Vec<_>>()
                                  .join("\n");

        count += 1;
        assert_eq!(printed.trim_end(), expected.trim_end(), "script {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
