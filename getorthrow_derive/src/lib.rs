use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{FnArg, Ident, ItemFn, LitStr, Pat, PatType, ReturnType, Token, spanned::Spanned};

/// Sets the not-found message of the `GetOrThrow` returned by a function.
///
/// `{}` placeholders are filled, in order, with the function's arguments
/// (receiver excluded). `args(...)` picks which arguments and in what order.
/// Every argument used must implement `Display`. Without a template the
/// message is reset to `DEFAULT_ERROR_MESSAGE`.
///
/// ```ignore
/// #[not_found_message("User {} not found")]
/// fn find_user(&self, id: u64) -> GetOrThrow<User> { ... }
///
/// #[not_found_message("No {} in {}", args(name, tenant))]
/// async fn find_by_name(&self, session: &Session, tenant: &str, name: &str) -> GetOrThrow<User> { ... }
/// ```
#[proc_macro_attribute]
pub fn not_found_message(attr: TokenStream, item: TokenStream) -> TokenStream {
    match expand_not_found_message(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct NotFoundMessageOptions {
    template: Option<LitStr>,
    args: Option<Vec<Ident>>,
}

impl Parse for NotFoundMessageOptions {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut options = NotFoundMessageOptions {
            template: None,
            args: None,
        };

        if input.peek(LitStr) {
            options.template = Some(input.parse()?);
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        while !input.is_empty() {
            let option: Ident = input.parse()?;
            if option != "args" {
                return Err(syn::Error::new(
                    option.span(),
                    "Unsupported #[not_found_message(...)] option. Supported: \"template\", args(...)",
                ));
            }
            if options.args.is_some() {
                return Err(syn::Error::new(option.span(), "args(...) given more than once"));
            }

            let content;
            syn::parenthesized!(content in input);
            let names = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
            options.args = Some(names.into_iter().collect());

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(options)
    }
}

fn expand_not_found_message(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let options: NotFoundMessageOptions = syn::parse2(attr)?;
    let mut func: ItemFn = syn::parse2(item).map_err(|err| {
        syn::Error::new(
            err.span(),
            "#[not_found_message] can only be applied to functions or impl methods",
        )
    })?;

    let output_ty = match &func.sig.output {
        ReturnType::Type(_, ty) => ty.clone(),
        ReturnType::Default => {
            return Err(syn::Error::new(
                func.sig.span(),
                "#[not_found_message] functions must return GetOrThrow<T, E>",
            ));
        }
    };

    let params = named_params(&func)?;
    let args = match options.args {
        Some(selected) => {
            for name in &selected {
                if !params.iter().any(|param| param == name) {
                    return Err(syn::Error::new(
                        name.span(),
                        format!("`{}` is not an argument of this function", name),
                    ));
                }
            }
            selected
        }
        None => params,
    };

    let template = match options.template {
        Some(lit) => quote!(#lit),
        None => quote!(::getorthrow::DEFAULT_ERROR_MESSAGE),
    };
    let arg_count = args.len();
    let block = &func.block;

    let call = if func.sig.asyncness.is_some() {
        quote!(async move #block.await)
    } else {
        quote!(::getorthrow::__call_once(move || #block))
    };

    let body = quote!({
        let __not_found_message = {
            let __args: [&dyn ::std::fmt::Display; #arg_count] = [#(&#args),*];
            ::getorthrow::NotFoundMessage::new(#template).render(__args)
        };
        let __result: #output_ty = #call;
        __result.change_message(__not_found_message)
    });
    func.block = Box::new(syn::parse2(body)?);

    Ok(quote!(#func))
}

// Names of the typed arguments, receiver excluded, in declaration order.
fn named_params(func: &ItemFn) -> syn::Result<Vec<Ident>> {
    let mut params = Vec::new();
    for input in &func.sig.inputs {
        let FnArg::Typed(PatType { pat, .. }) = input else {
            continue;
        };
        let Pat::Ident(pat_ident) = pat.as_ref() else {
            return Err(syn::Error::new(
                pat.span(),
                "Only named arguments are supported in #[not_found_message] functions",
            ));
        };
        params.push(pat_ident.ident.clone());
    }
    Ok(params)
}
