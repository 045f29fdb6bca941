use std::fs;

use idk::{config::Options, run_source};
use walkdir::WalkDir;

#[test]
fn demo_programs_print_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").sort_by_file_name()
                             .into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "idk"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                            panic!("Failed to read {expected_path:?}: {e}")
                                                        });

        count += 1;
        let mut out = Vec::new();
        if let Err(e) = run_source(&source, &Options::default(), &mut out) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(String::from_utf8_lossy(&out), expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn demo_programs_run_without_the_checker() {
    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "idk"))
    {
        let source = fs::read_to_string(entry.path()).expect("demo is readable");
        let checked = run_source(&source, &Options::default(), &mut Vec::new()).expect("checked run");
        let unchecked =
            run_source(&source, &Options::unchecked(), &mut Vec::new()).expect("unchecked run");

        assert_eq!(checked, unchecked, "history of {:?} depends on the checker", entry.path());
    }
}
