//! Integration tests for the viewcfg binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const BRAIL: &str = "Castle.MonoRail.Views.Brail.BooViewEngine";
const NVELOCITY: &str = "Castle.MonoRail.Framework.Views.NVelocity.NVelocityViewEngine";

/// A `viewcfg` command isolated from the user's settings and environment.
fn viewcfg(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("viewcfg");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("VIEWCFG__RESOLVE__SECTION")
        .env_remove("VIEWCFG__RESOLVE__BASE_DIR")
        .env_remove("VIEWCFG__REGISTRY__EXTRA_ENGINES");
    cmd
}

fn write_doc(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("web.config");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("engines"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn resolves_multi_engine_document_as_json() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("views")).unwrap();
    let doc = write_doc(
        temp.path(),
        &format!(
            r#"<monorail>
                 <viewEngines viewPathRoot="views">
                   <add type="{BRAIL}" xhtml="true" />
                   <add type="{NVELOCITY}" />
                 </viewEngines>
               </monorail>"#
        ),
    );

    let assert = viewcfg(temp.path())
        .args(["resolve", "--format", "json"])
        .arg(&doc)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(
        json["view_path_root"],
        temp.path().join("views").display().to_string()
    );
    assert_eq!(json["virtual_path_root"], "views");
    assert_eq!(json["engines"][0]["engine_type"], BRAIL);
    assert_eq!(json["engines"][0]["markup"], "xhtml");
    assert_eq!(json["engines"][1]["markup"], "html");
}

#[test]
fn resolves_legacy_document_with_sources_as_plain() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("site/views")).unwrap();
    let doc = write_doc(
        temp.path(),
        r#"<monorail>
             <viewEngine viewPathRoot="site/views" xhtmlRendering="true" />
             <controllers>
               <additionalSources>
                 <assembly name="Shared" namespace="Shared.Views" />
                 <path location="../common" />
               </additionalSources>
             </controllers>
           </monorail>"#,
    );

    viewcfg(temp.path())
        .args(["resolve", "--format", "plain"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("virtual_path_root=site/views"))
        .stdout(predicate::str::contains(
            "engines.0.type=Castle.MonoRail.Framework.Views.Aspx.WebFormsViewEngine",
        ))
        .stdout(predicate::str::contains("engines.0.markup=xhtml"))
        .stdout(predicate::str::contains("assembly_sources.0.name=Shared"))
        .stdout(predicate::str::contains("path_sources.0=../common"));
}

#[test]
fn section_flag_selects_nested_element() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("views")).unwrap();
    let doc = write_doc(
        temp.path(),
        r#"<configuration>
             <system.web />
             <monorail><viewEngines><add type="Castle.MonoRail.Views.Brail.BooViewEngine" /></viewEngines></monorail>
           </configuration>"#,
    );

    viewcfg(temp.path())
        .args(["resolve", "--section", "monorail", "--format", "plain"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("engines.0.type={BRAIL}")));
}

#[test]
fn base_dir_flag_overrides_document_directory() {
    let temp = TempDir::new().unwrap();
    let app = temp.path().join("app");
    fs::create_dir_all(app.join("views")).unwrap();
    let doc = write_doc(temp.path(), "<monorail />");

    viewcfg(temp.path())
        .args(["resolve", "--format", "plain", "--base-dir"])
        .arg(&app)
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "view_path_root={}",
            app.join("views").display()
        )));
}

#[test]
fn table_output_names_view_root() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("views")).unwrap();
    let doc = write_doc(temp.path(), "<monorail />");

    viewcfg(temp.path())
        .arg("resolve")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("View engine configuration"))
        .stdout(predicate::str::contains("WebFormsViewEngine"));
}

// ── failures ──────────────────────────────────────────────────────────────────

#[test]
fn missing_view_folder_exits_three() {
    let temp = TempDir::new().unwrap();
    let doc = write_doc(temp.path(), "<monorail />");

    viewcfg(temp.path())
        .arg("resolve")
        .arg(&doc)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "View folder configured could not be found",
        ));
}

#[test]
fn unregistered_engine_exits_four() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("views")).unwrap();
    let doc = write_doc(
        temp.path(),
        r#"<monorail><viewEngines><add type="Acme.Views.HamlEngine" /></viewEngines></monorail>"#,
    );

    viewcfg(temp.path())
        .arg("resolve")
        .arg(&doc)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Acme.Views.HamlEngine"));
}

#[test]
fn missing_type_attribute_exits_four_even_without_views() {
    let temp = TempDir::new().unwrap();
    let doc = write_doc(
        temp.path(),
        r#"<monorail><viewEngines><add xhtml="true" /></viewEngines></monorail>"#,
    );

    viewcfg(temp.path())
        .arg("resolve")
        .arg(&doc)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("'type'"));
}

#[test]
fn missing_input_file_exits_three() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .args(["resolve", "does-not-exist.config"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn malformed_document_exits_two() {
    let temp = TempDir::new().unwrap();
    let doc = write_doc(temp.path(), "<monorail><viewEngines></monorail>");

    viewcfg(temp.path()).arg("resolve").arg(&doc).assert().code(2);
}

#[test]
fn unknown_section_exits_three() {
    let temp = TempDir::new().unwrap();
    let doc = write_doc(temp.path(), "<configuration />");

    viewcfg(temp.path())
        .args(["resolve", "--section", "monorail"])
        .arg(&doc)
        .assert()
        .code(3);
}

#[test]
fn missing_settings_file_exits_four() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .args(["--config", "absent.toml", "engines"])
        .assert()
        .code(4);
}

// ── registry & settings ───────────────────────────────────────────────────────

#[test]
fn engines_lists_builtin_engines() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .args(["engines", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(BRAIL))
        .stdout(predicate::str::contains(NVELOCITY))
        .stdout(predicate::str::contains("AspViewEngine"));
}

#[test]
fn extra_engines_from_settings_file_are_resolvable() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("views")).unwrap();
    let settings = temp.path().join("viewcfg.toml");
    fs::write(
        &settings,
        "[registry]\nextra_engines = [\"Acme.Views.HamlEngine\"]\n",
    )
    .unwrap();
    let doc = write_doc(
        temp.path(),
        r#"<monorail><viewEngine customEngine="Acme.Views.HamlEngine, Acme.Views" /></monorail>"#,
    );

    viewcfg(temp.path())
        .arg("--config")
        .arg(&settings)
        .args(["resolve", "--format", "plain"])
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "engines.0.type=Acme.Views.HamlEngine",
        ));
}

#[test]
fn extra_engines_from_environment_are_listed() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .env("VIEWCFG__REGISTRY__EXTRA_ENGINES", "Acme.Views.HamlEngine")
        .args(["engines", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme.Views.HamlEngine"));
}

#[test]
fn config_get_unknown_key_exits_four() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .args(["config", "get", "nope"])
        .assert()
        .code(4);
}

#[cfg(target_os = "linux")]
#[test]
fn init_writes_settings_under_config_home() {
    let temp = TempDir::new().unwrap();

    viewcfg(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = temp.path().join(".config/viewcfg/config.toml");
    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.contains("extra_engines"));

    viewcfg(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_are_generated() {
    let temp = TempDir::new().unwrap();
    viewcfg(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("viewcfg"));
}
