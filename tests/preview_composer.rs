//! Preview composition over extracted artifacts

use codesplit::split::samples::MIXED_ASSETS;
use codesplit::{compose, extract, ArtifactSet, Workspace};

#[test]
fn empty_set_yields_minimal_document() {
    let doc = compose(&ArtifactSet::default());
    let text = doc.as_str();
    assert!(text.starts_with("<!DOCTYPE html>"));
    for element in ["<html>", "<head>", "</head>", "<body>", "</body>", "</html>"] {
        assert!(text.contains(element), "missing {}", element);
    }
}

#[test]
fn composed_scenario() {
    let set = extract("<style>a{color:red}</style><p>Hi</p><script>console.log(1)</script>");
    insta::assert_snapshot!(compose(&set).as_str(), @r###"
    <!DOCTYPE html>
    <html>
    <head><style>a{color:red}</style></head>
    <body>
    <!-- Styles Extracted --><p>Hi</p><!-- Scripts Extracted -->
    <script>console.log(1)</script>
    </body>
    </html>
    "###);
}

#[test]
fn external_scripts_load_before_inline_behavior() {
    let doc = compose(&extract(MIXED_ASSETS));
    let text = doc.as_str();
    let external = text.find("cdn.example.com/lib.js").unwrap();
    let inline = text.find("window.ready = true;").unwrap();
    assert!(external < inline);
    assert_eq!(text.matches("<style>").count(), 1);
}

#[test]
fn composition_does_not_reextract() {
    // the composed document holds exactly one style block and one inline script
    let doc = compose(&extract(MIXED_ASSETS));
    let again = extract(doc.as_str());
    assert_eq!(
        again.style,
        "h1 { font-size: 2rem; }\n\n.no-print { display: none; }"
    );
    assert_eq!(
        again.behavior,
        "import { start } from './app.js';\n  start();\n\nwindow.ready = true;"
    );
}

#[test]
fn workspace_preview_matches_compose() {
    let mut workspace = Workspace::new();
    workspace.load_sample();
    let from_workspace = workspace.preview().unwrap();
    let direct = compose(workspace.artifacts().unwrap());
    assert_eq!(from_workspace, direct);
}
