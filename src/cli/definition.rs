//! Command definitions
//!
//! A [`Definition`] is what a command declares about itself during `init`:
//! name, description, aliases, examples, arguments and the setters that
//! receive argument values.

use std::collections::HashMap;
use std::fmt;

/// Command argument is required.
pub const ARG_REQUIRED: bool = true;

/// Command argument is optional.
pub const ARG_OPTIONAL: bool = false;

/// Typed handler receiving an argument's raw value.
pub type Setter<C> = fn(&mut C, &str);

/// A single argument a command accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDef {
    /// Canonical name, lower-cased
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Alternate names, lower-cased
    pub aliases: Vec<String>,
}

impl ArgDef {
    /// Whether `name` (already lower-cased) is this argument's name or one of its aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

/// Documented usage shown in help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub description: String,
    pub command: String,
}

/// Case-insensitive match of `input` against a name or any alias.
pub fn matches_name(name: &str, aliases: &[String], input: &str) -> bool {
    let input = input.to_lowercase();
    name == input || aliases.iter().any(|alias| *alias == input)
}

/// Inflect an argument name into its setter name.
///
/// Hyphen-separated words are capitalized and joined behind `set`:
/// `my-argument` becomes `setMyArgument`.
pub fn setter_name(arg: &str) -> String {
    let mut setter = String::from("set");
    for word in arg.to_lowercase().split('-') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            setter.extend(first.to_uppercase());
            setter.push_str(chars.as_str());
        }
    }
    setter
}

/// Everything a command declares about itself.
///
/// Parameterized by the command type so setters can be typed against it.
pub struct Definition<C> {
    name: Option<String>,
    description: Option<String>,
    aliases: Vec<String>,
    examples: Vec<Example>,
    args: Vec<ArgDef>,
    primary_arg: Option<String>,
    setters: HashMap<String, Setter<C>>,
}

impl<C> Default for Definition<C> {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            aliases: Vec::new(),
            examples: Vec::new(),
            args: Vec::new(),
            primary_arg: None,
            setters: HashMap::new(),
        }
    }
}

impl<C> fmt::Debug for Definition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut setters: Vec<&String> = self.setters.keys().collect();
        setters.sort();
        f.debug_struct("Definition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("aliases", &self.aliases)
            .field("examples", &self.examples)
            .field("args", &self.args)
            .field("primary_arg", &self.primary_arg)
            .field("setters", &setters)
            .finish()
    }
}

impl<C> Definition<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used on the command line to select the command. Stored lower-cased.
    pub fn set_command(&mut self, name: &str) -> &mut Self {
        self.name = Some(name.to_lowercase());
        self
    }

    /// Short description shown in help and in the command listing.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = Some(description.to_string());
        self
    }

    /// Register another name that selects this command.
    pub fn add_alias(&mut self, alias: &str) -> &mut Self {
        self.aliases.push(alias.to_lowercase());
        self
    }

    /// Register an argument. Name and aliases are stored lower-cased.
    pub fn add_arg(
        &mut self,
        name: &str,
        description: &str,
        required: bool,
        aliases: &[&str],
    ) -> &mut Self {
        self.args.push(ArgDef {
            name: name.to_lowercase(),
            description: description.to_string(),
            required,
            aliases: aliases.iter().map(|alias| alias.to_lowercase()).collect(),
        });
        self
    }

    /// Register an argument and make it the primary argument.
    ///
    /// The primary argument's value may be given without naming it: when
    /// exactly one token is left over after all flags are consumed, that
    /// token is assigned to the primary argument. Only one primary argument
    /// exists; a later call replaces an earlier one.
    pub fn add_primary_arg(
        &mut self,
        name: &str,
        description: &str,
        required: bool,
        aliases: &[&str],
    ) -> &mut Self {
        self.primary_arg = Some(name.to_lowercase());
        self.add_arg(name, description, required, aliases)
    }

    /// Add an example usage displayed in help.
    pub fn add_example(&mut self, description: &str, command: &str) -> &mut Self {
        self.examples.push(Example {
            description: description.to_string(),
            command: command.to_string(),
        });
        self
    }

    /// Register the handler that receives values for argument `name`.
    pub fn add_setter(&mut self, name: &str, setter: Setter<C>) -> &mut Self {
        self.setters.insert(setter_name(name), setter);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn args(&self) -> &[ArgDef] {
        &self.args
    }

    pub fn primary_arg(&self) -> Option<&str> {
        self.primary_arg.as_deref()
    }

    /// First argument, in registration order, whose name or alias equals `name`.
    pub fn find_arg(&self, name: &str) -> Option<&ArgDef> {
        let name = name.to_lowercase();
        self.args.iter().find(|arg| arg.matches(&name))
    }

    /// Setter registered for argument `name`, if any.
    pub fn setter(&self, name: &str) -> Option<Setter<C>> {
        self.setters.get(&setter_name(name)).copied()
    }

    pub fn has_setter(&self, name: &str) -> bool {
        self.setters.contains_key(&setter_name(name))
    }

    /// Whether `input` selects this command, by name or alias, ignoring case.
    pub fn is_selected(&self, input: &str) -> bool {
        match &self.name {
            Some(name) => matches_name(name, &self.aliases, input),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy {
        name: String,
    }

    impl Dummy {
        fn set_name(&mut self, value: &str) {
            self.name = value.to_string();
        }
    }

    #[test]
    fn given_hyphenated_names_when_inflected_then_pascal_cased_setter() {
        assert_eq!(setter_name("my-argument"), "setMyArgument");
        assert_eq!(setter_name("name"), "setName");
        assert_eq!(setter_name("Working-Dir"), "setWorkingDir");
        assert_eq!(setter_name("a-b-c"), "setABC");
    }

    #[test]
    fn given_mixed_case_input_when_defining_then_names_are_lower_cased() {
        let mut def: Definition<Dummy> = Definition::new();
        def.set_command("Gen-Admin")
            .add_alias("GA")
            .add_arg("Folder", "Target folder", ARG_REQUIRED, &["F", "Dir"]);

        assert_eq!(def.name(), Some("gen-admin"));
        assert_eq!(def.aliases(), &["ga".to_string()]);
        assert_eq!(def.args()[0].name, "folder");
        assert_eq!(def.args()[0].aliases, vec!["f".to_string(), "dir".to_string()]);
    }

    #[test]
    fn given_two_primary_args_when_defining_then_last_call_wins() {
        let mut def: Definition<Dummy> = Definition::new();
        def.add_primary_arg("first", "First", ARG_OPTIONAL, &[])
            .add_primary_arg("Second", "Second", ARG_OPTIONAL, &[]);

        assert_eq!(def.primary_arg(), Some("second"));
        assert_eq!(def.args().len(), 2);
    }

    #[test]
    fn given_alias_shared_by_two_args_when_finding_then_first_registered_wins() {
        let mut def: Definition<Dummy> = Definition::new();
        def.add_arg("alpha", "A", ARG_OPTIONAL, &["x"])
            .add_arg("beta", "B", ARG_OPTIONAL, &["x"]);

        assert_eq!(def.find_arg("X").map(|a| a.name.as_str()), Some("alpha"));
        assert_eq!(def.find_arg("BETA").map(|a| a.name.as_str()), Some("beta"));
        assert!(def.find_arg("gamma").is_none());
    }

    #[test]
    fn given_registered_setter_when_looked_up_then_invokes_handler() {
        let mut def: Definition<Dummy> = Definition::new();
        def.add_arg("name", "Name", ARG_REQUIRED, &[])
            .add_setter("name", Dummy::set_name);

        let mut dummy = Dummy {
            name: String::new(),
        };
        let setter = def.setter("NAME").expect("setter registered");
        setter(&mut dummy, "Widget");

        assert_eq!(dummy.name, "Widget");
        assert!(!def.has_setter("other"));
    }

    #[test]
    fn given_name_and_aliases_when_selecting_then_case_insensitive() {
        let mut def: Definition<Dummy> = Definition::new();
        def.set_command("dbdeploy").add_alias("db");

        assert!(def.is_selected("DbDeploy"));
        assert!(def.is_selected("DB"));
        assert!(!def.is_selected("deploy"));
    }
}
