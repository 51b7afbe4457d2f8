use ariadne::Fmt;
use grade_error::{error_kind, EXPR};

error_kind! {
    /// A variable is not defined.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UndefinedVariable {
        /// The name of the variable.
        pub name: String,

        /// Variables with similar names that are defined, if any.
        pub suggestions: Vec<String>,
    }
    message = |this: &Self| format!("`{}` is not defined", this.name),
    labels = [|_| "this variable"],
    help = |this: &Self| if this.suggestions.is_empty() {
        "only the grading variables and mathematical constants can be used here".to_string()
    } else {
        format!(
            "did you mean: {}?",
            this.suggestions
                .iter()
                .map(|name| format!("`{}`", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        )
    },
}

error_kind! {
    /// A function is not defined.
    #[derive(Debug, Clone, PartialEq)]
    pub struct UndefinedFunction {
        /// The name of the function.
        pub name: String,

        /// Functions with similar names that are defined, if any.
        pub suggestions: Vec<String>,
    }
    message = |this: &Self| format!("the `{}` function does not exist", this.name),
    labels = [|_| "this function"],
    help = |this: &Self| if this.suggestions.is_empty() {
        "see the list of supported functions".to_string()
    } else {
        format!(
            "did you mean: {}?",
            this.suggestions
                .iter()
                .map(|name| format!("`{}`", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        )
    },
}

error_kind! {
    /// A required argument to a function call is missing.
    #[derive(Debug, Clone, PartialEq)]
    pub struct MissingArgument {
        /// The name of the function.
        pub name: String,

        /// The zero-based index of the missing argument.
        pub index: usize,

        /// The number of arguments the function expects.
        pub expected: usize,

        /// The number of arguments that were given.
        pub given: usize,
    }
    message = |this: &Self| format!(
        "missing argument #{} for the `{}` function",
        this.index + 1,
        this.name,
    ),
    labels = [|this: &Self| format!(
        "this function takes {} argument(s), but {} were given",
        this.expected,
        this.given,
    )],
}

error_kind! {
    /// Too many arguments were given to a function call.
    #[derive(Debug, Clone, PartialEq)]
    pub struct TooManyArguments {
        /// The name of the function.
        pub name: String,

        /// The maximum number of arguments the function accepts.
        pub expected: usize,

        /// The number of arguments that were given.
        pub given: usize,
    }
    message = |this: &Self| format!("too many arguments were given to the `{}` function", this.name),
    labels = [|this: &Self| format!(
        "this function takes at most {} argument(s), but {} were given",
        this.expected,
        this.given,
    )],
}
