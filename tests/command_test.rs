//! Tests for argument parsing through bound commands

use rstest::{fixture, rstest};

use dewdrop::cli::renderer::RenderEvent;
use dewdrop::cli::{
    BoundCommand, CliError, CliResult, Command, CommandHandle, Context, Definition, ParseError,
    RecordingRenderer, ARG_OPTIONAL, ARG_REQUIRED,
};
use dewdrop::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Command recording every setter call as `(setter, value)`
#[derive(Debug, Default)]
struct GenAdmin {
    calls: Vec<(String, String)>,
}

impl GenAdmin {
    fn set_name(&mut self, value: &str) {
        self.calls.push(("setName".into(), value.into()));
    }

    fn set_model_class(&mut self, value: &str) {
        self.calls.push(("setModelClass".into(), value.into()));
    }

    fn set_folder(&mut self, value: &str) {
        self.calls.push(("setFolder".into(), value.into()));
    }
}

impl Command for GenAdmin {
    fn init(&mut self, def: &mut Definition<Self>) {
        def.set_command("gen-admin")
            .set_description("Generate an admin component")
            .add_alias("ga")
            .add_arg("name", "Component name", ARG_REQUIRED, &["n"])
            .add_arg("model-class", "Model class", ARG_OPTIONAL, &["model", "m"])
            .add_primary_arg("folder", "Target folder", ARG_OPTIONAL, &["f"])
            .add_setter("name", Self::set_name)
            .add_setter("model-class", Self::set_model_class)
            .add_setter("folder", Self::set_folder)
            .add_example("Generate a widget admin", "./dewdrop gen-admin --name=Widget");
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<()> {
        ctx.renderer.text(&format!("{} setter calls", self.calls.len()));
        Ok(())
    }
}

/// Command with a required primary argument and nothing else
#[derive(Debug, Default)]
struct Open {
    path: Option<String>,
}

impl Command for Open {
    fn init(&mut self, def: &mut Definition<Self>) {
        def.set_command("open")
            .set_description("Open a path")
            .add_primary_arg("path", "Path to open", ARG_REQUIRED, &[])
            .add_setter("path", |cmd: &mut Open, value: &str| {
                cmd.path = Some(value.to_string())
            });
    }

    fn execute(&mut self, _ctx: &mut Context<'_>) -> CliResult<()> {
        Ok(())
    }
}

/// Command that forgets its description
#[derive(Debug, Default)]
struct Nameless;

impl Command for Nameless {
    fn init(&mut self, def: &mut Definition<Self>) {
        def.set_command("nameless");
    }

    fn execute(&mut self, _ctx: &mut Context<'_>) -> CliResult<()> {
        Ok(())
    }
}

#[fixture]
fn gen_admin() -> BoundCommand<GenAdmin> {
    BoundCommand::new(GenAdmin::default()).expect("valid command")
}

fn tokens(input: &[&str]) -> Vec<String> {
    input.iter().map(|s| s.to_string()).collect()
}

fn calls(command: &BoundCommand<GenAdmin>) -> Vec<(&str, &str)> {
    command
        .command()
        .calls
        .iter()
        .map(|(setter, value)| (setter.as_str(), value.as_str()))
        .collect()
}

// ============================================================
// Accepted forms
// ============================================================

#[rstest]
#[case::long_equals(&["--name=Widget"])]
#[case::long_separate(&["--name", "Widget"])]
#[case::short_equals(&["-name=Widget"])]
#[case::short_separate(&["-name", "Widget"])]
#[case::alias_equals(&["-n=Widget"])]
#[case::alias_separate(&["--n", "Widget"])]
#[case::upper_case(&["--NAME=Widget"])]
#[case::mixed_case(&["--Name", "Widget"])]
fn given_equivalent_forms_when_parsing_then_setter_receives_same_value(
    mut gen_admin: BoundCommand<GenAdmin>,
    #[case] input: &[&str],
) {
    // Act
    gen_admin.try_parse_args(&tokens(input)).expect("parse succeeds");

    // Assert
    assert_eq!(calls(&gen_admin), vec![("setName", "Widget")]);
}

#[rstest]
fn given_hyphenated_arg_when_parsing_then_pascal_case_setter_is_invoked(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    gen_admin
        .try_parse_args(&tokens(&["--name=Widget", "--model-class", "Model\\Widget"]))
        .expect("parse succeeds");

    assert_eq!(
        calls(&gen_admin),
        vec![("setName", "Widget"), ("setModelClass", "Model\\Widget")]
    );
}

#[rstest]
fn given_repeated_arg_when_parsing_then_setter_runs_for_each_occurrence(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    gen_admin
        .try_parse_args(&tokens(&["--name=first", "-n", "second"]))
        .expect("parse succeeds");

    assert_eq!(
        calls(&gen_admin),
        vec![("setName", "first"), ("setName", "second")]
    );
}

// ============================================================
// Primary argument
// ============================================================

#[test]
fn given_single_bare_token_when_parsing_then_primary_receives_it() {
    let mut open = BoundCommand::new(Open::default()).expect("valid command");

    open.try_parse_args(&tokens(&["/some/path"]))
        .expect("parse succeeds");

    assert_eq!(open.command().path.as_deref(), Some("/some/path"));
}

#[rstest]
fn given_flags_and_one_bare_token_when_parsing_then_primary_is_assigned_last(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    gen_admin
        .try_parse_args(&tokens(&["admin/widgets", "--name=Widget"]))
        .expect("parse succeeds");

    assert_eq!(
        calls(&gen_admin),
        vec![("setName", "Widget"), ("setFolder", "admin/widgets")]
    );
}

#[rstest]
fn given_two_bare_tokens_when_parsing_then_primary_is_not_assigned(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    gen_admin
        .try_parse_args(&tokens(&["--name=Widget", "one", "two"]))
        .expect("optional primary may stay unset");

    assert_eq!(calls(&gen_admin), vec![("setName", "Widget")]);
}

#[test]
fn given_two_bare_tokens_and_required_primary_when_parsing_then_required_missing() {
    let mut open = BoundCommand::new(Open::default()).expect("valid command");

    let err = open
        .try_parse_args(&tokens(&["/a", "/b"]))
        .unwrap_err();

    assert_eq!(err, ParseError::MissingRequired { name: "path".into() });
    assert!(open.command().path.is_none());
}

#[rstest]
fn given_primary_set_by_flag_when_bare_token_remains_then_flag_value_wins(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    gen_admin
        .try_parse_args(&tokens(&["--name=Widget", "--folder=a", "b"]))
        .expect("parse succeeds");

    assert_eq!(
        calls(&gen_admin),
        vec![("setName", "Widget"), ("setFolder", "a")]
    );
}

// ============================================================
// --help
// ============================================================

#[rstest]
#[case::alone(&["--help"])]
#[case::first(&["--help", "--name=Widget"])]
#[case::last(&["--name=Widget", "--help"])]
#[case::after_unknown(&["--unknown=1", "--help"])]
#[case::upper_case(&["--HELP"])]
#[case::with_value(&["--help=yes"])]
fn given_help_anywhere_when_parsing_then_help_requested_and_no_setters(
    mut gen_admin: BoundCommand<GenAdmin>,
    #[case] input: &[&str],
) {
    let err = gen_admin.try_parse_args(&tokens(input)).unwrap_err();

    assert_eq!(err, ParseError::HelpRequested);
    assert!(calls(&gen_admin).is_empty());
}

#[rstest]
fn given_help_when_parse_args_then_help_rendered_without_error(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    let mut renderer = RecordingRenderer::new();

    let ok = gen_admin.parse_args(&tokens(&["--name=Widget", "--help"]), &mut renderer);

    assert!(!ok);
    assert!(renderer.errors().is_empty());
    assert_eq!(renderer.titles(), vec!["gen-admin"]);
}

#[rstest]
fn given_single_dash_help_with_value_when_parsing_then_missing_setter(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    let err = gen_admin
        .try_parse_args(&tokens(&["-help", "value"]))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "No setter method available for argument \"help\""
    );
}

// ============================================================
// Failures
// ============================================================

#[rstest]
fn given_required_arg_absent_when_parsing_then_error_names_it(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    let err = gen_admin
        .try_parse_args(&tokens(&["--folder=admin"]))
        .unwrap_err();

    assert_eq!(err.to_string(), "Required argument \"name\" not set.");
    assert!(calls(&gen_admin).is_empty(), "failed parse applies nothing");
}

#[rstest]
fn given_unknown_arg_when_parsing_then_error_names_it_and_no_setters(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    let err = gen_admin
        .try_parse_args(&tokens(&["--name=Widget", "--unknown=1"]))
        .unwrap_err();

    assert_eq!(err, ParseError::UnknownArgument { name: "unknown".into() });
    assert!(err.to_string().contains("unknown"));
    assert!(calls(&gen_admin).is_empty());
}

#[rstest]
fn given_unknown_arg_when_parse_args_then_error_and_help_rendered(
    mut gen_admin: BoundCommand<GenAdmin>,
) {
    let mut renderer = RecordingRenderer::new();

    let ok = gen_admin.parse_args(&tokens(&["--unknown=1"]), &mut renderer);

    assert!(!ok);
    assert_eq!(
        renderer.events.first(),
        Some(&RenderEvent::Error(
            "Attempting to set unknown argument \"unknown\"".into()
        ))
    );
    assert_eq!(renderer.titles(), vec!["gen-admin"]);
    assert!(renderer
        .events
        .contains(&RenderEvent::Subhead("Arguments".into())));
}

#[rstest]
#[case::at_end(&["--name"])]
#[case::before_flag(&["--name", "--folder=x"])]
fn given_flag_without_value_when_parsing_then_missing_value(
    mut gen_admin: BoundCommand<GenAdmin>,
    #[case] input: &[&str],
) {
    let err = gen_admin.try_parse_args(&tokens(input)).unwrap_err();

    assert_eq!(err, ParseError::MissingValue { name: "name".into() });
}

// ============================================================
// Help content and selection
// ============================================================

#[rstest]
fn given_bound_command_when_help_content_then_builtin_help_arg_comes_first(
    gen_admin: BoundCommand<GenAdmin>,
) {
    assert_eq!(gen_admin.definition().primary_arg(), Some("folder"));
    assert_eq!(gen_admin.description(), "Generate an admin component");

    let rows = gen_admin.help_content().arg_rows();

    assert_eq!(
        rows[0],
        (
            "--help".to_string(),
            "Display the help message for this command (Optional)".to_string()
        )
    );
    assert_eq!(
        rows[1],
        (
            "--name".to_string(),
            "Component name (Required)".to_string()
        )
    );
}

#[rstest]
#[case("gen-admin", true)]
#[case("GEN-ADMIN", true)]
#[case("ga", true)]
#[case("Ga", true)]
#[case("gen", false)]
#[case("", false)]
fn given_input_when_selecting_then_matches_name_or_alias_ignoring_case(
    gen_admin: BoundCommand<GenAdmin>,
    #[case] input: &str,
    #[case] expected: bool,
) {
    assert_eq!(gen_admin.is_selected(input), expected);
}

#[test]
fn given_command_without_description_when_bound_then_misconfigured() {
    let err = BoundCommand::new(Nameless).unwrap_err();

    assert!(matches!(err, CliError::MisconfiguredCommand { .. }));
    assert!(err.to_string().contains("Nameless"));
}
