//! Integration tests for the install decision procedure.

use mixhook_edit::{AliasEntry, Error, InstallOutcome, plan_install};
use pretty_assertions::assert_eq;

fn precommit(steps: &[&str]) -> AliasEntry {
    AliasEntry::new("precommit", steps.iter().map(ToString::to_string).collect()).unwrap()
}

const MIX_EXS: &str = r#"defmodule Demo.MixProject do
  use Mix.Project

  def project do
    [
      app: :demo,
      version: "0.1.0",
      elixir: "~> 1.17",
      deps: deps()
    ]
  end

  defp deps do
    []
  end
end
"#;

#[test]
fn test_insert_into_inline_list() {
    let text = "aliases: [\n  test: [\"test\"]\n]";
    let outcome = plan_install(text, &precommit(&["format", "test"]), false).unwrap();

    assert_eq!(
        outcome,
        InstallOutcome::Inserted(
            "aliases: [\n  test: [\"test\"],\n  precommit: [\"format\", \"test\"]\n]".to_string()
        )
    );
}

#[test]
fn test_install_is_idempotent() {
    let text = "aliases: [\n  test: [\"test\"]\n]";
    let entry = precommit(&["format", "test"]);

    let InstallOutcome::Inserted(installed) = plan_install(text, &entry, false).unwrap() else {
        panic!("first install should insert");
    };
    let second = plan_install(&installed, &entry, false).unwrap();
    assert_eq!(second, InstallOutcome::AlreadyInstalled);
}

#[test]
fn test_install_into_block_form() {
    let text = r#"defmodule Demo.MixProject do
  def project do
    [
      app: :demo,
      aliases: aliases()
    ]
  end

  defp aliases do
    [
      test: ["test"]
    ]
  end
end
"#;
    let outcome = plan_install(text, &precommit(&["format", "test"]), false).unwrap();

    let InstallOutcome::Inserted(result) = outcome else {
        panic!("expected Inserted");
    };
    assert!(result.contains("test: [\"test\"],\n      precommit: [\"format\", \"test\"]"));
    // The project list is untouched.
    assert!(result.contains("app: :demo,\n      aliases: aliases()"));
}

#[test]
fn test_conflict_refused_then_forced() {
    let text = "aliases: [precommit: [\"lint\"]]";
    let entry = precommit(&["format", "test"]);

    let refused = plan_install(text, &entry, false).unwrap();
    let InstallOutcome::Refused { reason } = refused else {
        panic!("expected Refused");
    };
    assert!(reason.contains("already exists"));

    let forced = plan_install(text, &entry, true).unwrap();
    let InstallOutcome::Replaced(result) = forced else {
        panic!("expected Replaced");
    };
    assert_eq!(result, "aliases: [precommit: [\"format\", \"test\"]]");
    assert_eq!(result.matches("precommit:").count(), 1);
}

#[test]
fn test_synthesize_block_and_reference() {
    let outcome = plan_install(MIX_EXS, &precommit(&["format", "test"]), false).unwrap();

    let InstallOutcome::Synthesized(result) = outcome else {
        panic!("expected Synthesized");
    };
    assert_eq!(
        result,
        r#"defmodule Demo.MixProject do
  use Mix.Project

  def project do
    [
      app: :demo,
      version: "0.1.0",
      elixir: "~> 1.17",
      deps: deps(),
      aliases: aliases()
    ]
  end

  defp deps do
    []
  end

  defp aliases do
    [precommit: ["format", "test"]]
  end
end
"#
    );
}

#[test]
fn test_synthesized_text_is_installed() {
    let entry = precommit(&["format", "test"]);
    let InstallOutcome::Synthesized(result) = plan_install(MIX_EXS, &entry, false).unwrap() else {
        panic!("expected Synthesized");
    };
    assert_eq!(
        plan_install(&result, &entry, false).unwrap(),
        InstallOutcome::AlreadyInstalled
    );
}

#[test]
fn test_no_project_list_fails_with_guidance() {
    let err = plan_install("# not a mix file\n", &precommit(&["test"]), false).unwrap_err();
    let Error::NoInsertionPoint { message } = err else {
        panic!("expected NoInsertionPoint");
    };
    assert!(message.contains("by hand"));
}

#[test]
fn test_unterminated_list_reports_offset() {
    let text = "aliases: [test: [\"test\"]";
    let err = plan_install(text, &precommit(&["test"]), false).unwrap_err();
    assert_eq!(err, Error::UnterminatedBracket { offset: 9 });
}

#[test]
fn test_invalid_alias_name_rejected_at_construction() {
    let err = AliasEntry::new("pre commit", vec![]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidIdentifier {
            name: "pre commit".to_string()
        }
    );
}
