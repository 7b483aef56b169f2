use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse::Nothing, parse_macro_input, spanned::Spanned, Error, ItemFn};

/// Test attribute that prepares logging and panic backtraces before running the test body.
/// `async fn` tests are driven to completion on a multi-threaded tokio runtime.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    parse_macro_input!(attr as Nothing);
    let item = parse_macro_input!(item as ItemFn);

    match expand_test(item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_test(item: ItemFn) -> Result<TokenStream2, Error> {
    let ItemFn { attrs, vis, sig, block } = item;

    if !sig.inputs.is_empty() {
        return Err(Error::new(sig.inputs.span(), "test functions cannot take arguments"));
    }
    if !sig.generics.params.is_empty() {
        return Err(Error::new(sig.generics.span(), "test functions cannot be generic"));
    }

    let name = &sig.ident;
    let output = &sig.output;

    let body = if sig.asyncness.is_some() {
        quote! {
            ::shortid_test::tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to build test runtime")
                .block_on(async move #block)
        }
    } else {
        quote! { #block }
    };

    Ok(quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        #vis fn #name() #output {
            ::shortid_test::setup_test();
            #body
        }
    })
}
