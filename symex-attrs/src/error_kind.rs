use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Result};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
struct ErrorArgs {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorArgs {
    /// Collects the arguments from the first `error` attribute in the list.
    fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();
        let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Ok(args);
        };

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut args.message
            } else if meta.path.is_ident("labels") {
                &mut args.labels
            } else if meta.path.is_ident("help") {
                &mut args.help
            } else {
                return Err(meta.error("unknown tag, expected one of `message`, `labels`, `help`"));
            };

            *slot = Some(meta.value()?.parse()?);
            Ok(())
        })?;

        Ok(args)
    }
}

/// Generates the `ErrorKind` implementation for the given type.
pub fn expand(input: DeriveInput) -> Result<TokenStream2> {
    if let Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` cannot be derived for unions"));
    }

    let args = ErrorArgs::from_attrs(&input.attrs)?;
    let Some(message) = args.message else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "missing `#[error(message = ...)]` attribute",
        ));
    };

    let labels = match args.labels {
        Some(labels) => quote! {
            (#labels).into_iter().map(|label| label.to_string()).collect::<Vec<String>>()
        },
        None => quote! { Vec::<String>::new() },
    };
    let help = args.help.map(|help| quote! { builder.set_help(#help); });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::symex_error::ErrorKind for #name #ty_generics #where_clause {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn message(&self) -> String {
                (#message).to_string()
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::symex_error::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                use ::symex_error::ariadne::{Label, Report, ReportKind};

                let offset = spans.first().map_or(0, |span| span.start);
                let labels = #labels;

                #[allow(unused_mut)]
                let mut builder = Report::build(ReportKind::Error, src_id, offset)
                    .with_message(self.message())
                    .with_labels(
                        labels
                            .into_iter()
                            .zip(spans.iter().cloned())
                            .map(|(label_str, span)| {
                                let label = Label::new((src_id, span))
                                    .with_color(::symex_error::EXPR);

                                if label_str.is_empty() {
                                    label
                                } else {
                                    label.with_message(label_str)
                                }
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        }
    })
}
