//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, along with the [`error_kind!`] macro that generates implementations of it.

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while checking an answer.
pub trait ErrorKind: Debug + Send {
    /// The message displayed at the top of the error when it is displayed.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Declares an error kind struct and implements [`ErrorKind`] for it.
///
/// The `message`, `labels`, and `help` expressions are closures that receive a reference to the
/// error value, so fields of the struct can be used in them. (A plain expression cannot refer to
/// the generated method's `self` parameter across the macro boundary, so the value is passed in
/// explicitly.) One label is attached per span, in order; an empty label string attaches an
/// unlabeled highlight.
///
/// ```
/// use grade_error::error_kind;
///
/// error_kind! {
///     /// The variable is not defined.
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct UndefinedVariable {
///         /// The name of the variable.
///         pub name: String,
///     }
///     message = |this: &Self| format!("`{}` is not defined", this.name),
///     labels = [|_| "this variable"],
/// }
/// ```
#[macro_export]
macro_rules! error_kind {
    (
        $(#[$attr:meta])*
        pub struct $name:ident $body:tt
        message = $message:expr,
        labels = [$($label:expr),* $(,)?],
        $(help = $help:expr,)?
    ) => {
        $(#[$attr])*
        pub struct $name $body

        impl $crate::ErrorKind for $name {
            fn message(&self) -> String {
                String::from(($message)(self))
            }

            #[allow(unused_mut)]
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                let mut builder = ::ariadne::Report::build(
                    ::ariadne::ReportKind::Error,
                    src_id,
                    spans.first().map_or(0, |span| span.start),
                )
                    .with_message(String::from(($message)(self)))
                    .with_labels(
                        [$(String::from(($label)(self))),*]
                            .into_iter()
                            .enumerate()
                            .filter(|(i, _)| *i < spans.len())
                            .map(|(i, label_str)| {
                                let mut label = ::ariadne::Label::new((src_id, spans[i].clone()))
                                    .with_color($crate::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<Vec<_>>()
                    );

                $(builder.set_help(String::from(($help)(self)));)?
                builder.finish()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    error_kind! {
        /// A test error with a field interpolated into the message.
        #[derive(Debug, Clone, PartialEq)]
        pub struct BadName {
            pub name: String,
        }
        message = |this: &Self| format!("`{}` is not allowed here", this.name),
        labels = [|_| "this name"],
        help = |_| "rename it",
    }

    error_kind! {
        /// A test error with no fields and no help text.
        #[derive(Debug, Clone, PartialEq)]
        pub struct Unexpected;
        message = |_| "something unexpected",
        labels = [|_| ""],
    }

    #[test]
    fn message_interpolates_fields() {
        let err = Error::new(vec![0..3], BadName { name: "foo".to_string() });
        assert_eq!(err.kind.message(), "`foo` is not allowed here");
    }

    #[test]
    fn unit_struct_message() {
        let err = Error::new(vec![2..4], Unexpected);
        assert_eq!(err.kind.message(), "something unexpected");
    }

    #[test]
    fn report_builds_with_fewer_spans_than_labels() {
        let err = Error::new(vec![], Unexpected);
        // should not panic even though there is no span for the label
        let _ = err.build_report("input");
    }

    #[test]
    fn report_builds_with_help() {
        let err = Error::new(vec![0..3], BadName { name: "foo".to_string() });
        let _ = err.build_report("foo + 1");
    }
}
