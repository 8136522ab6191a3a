mod error_kind;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `symex_error::ErrorKind` trait for the given type.
///
/// The information of the error is provided with the `error` attribute:
///
/// ```
/// use symex_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not bound", self.name),
///     labels = ["this variable"],
///     help = "bind it before evaluating",
/// )]
/// pub struct Unbound {
///     name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | Anything iterable over displayable values; one label per span of the error.  |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// `message` is required. Each tag is an arbitrary expression, evaluated with `self` in scope;
/// `labels` can also refer to `spans`, the slice of spans the error points at.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error_kind::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
