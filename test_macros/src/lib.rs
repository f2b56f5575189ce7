use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Runs an async test against a fresh `crate::helpers::TestApp`.
///
/// The body sees the fixture as `app`. `app.clean_up()` runs after the body,
/// so nothing recorded in one test is visible to another.
#[proc_macro_attribute]
pub fn with_mailbox(_: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);

    if func.sig.asyncness.is_none() {
        return syn::Error::new_spanned(func.sig.fn_token, "#[with_mailbox] requires an async fn")
            .to_compile_error()
            .into();
    }

    let name = &func.sig.ident;
    let body = &func.block;
    let attrs = &func.attrs;

    quote! {
        #(#attrs)*
        #[tokio::test]
        async fn #name() {
            let app = crate::helpers::TestApp::new();
            #body
            app.clean_up();
        }
    }
    .into()
}
