use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Fields, ItemStruct};

/// Attribute that turns a struct of `name: Type` declarations into a
/// zero-sized canary marker.
///
/// Every field type `T` is rewritten to `PhantomData<T>`, so the struct
/// declares one type canary per field while occupying no storage at all.
/// The declared fields are never read or written; they exist so that
/// `tcon_check!` and `tcon_cast!` can compare call-site expressions
/// against them.
///
/// Alongside the rewritten struct the attribute generates a `const fn
/// new()` constructor plus `Copy`, `Clone` and `Default` impls. All of
/// them are unconditional: the fields are phantoms whatever the declared
/// types are.
///
/// ```
/// use tcon::tcon;
///
/// #[tcon]
/// pub struct StringListCon {
///     pub canary: *mut String,
/// }
///
/// // More complex: mapping from one type to another.
/// #[tcon]
/// pub struct IntToStringCon {
///     pub int_canary: *mut i32,
///     pub str_canary: *mut String,
/// }
///
/// assert_eq!(core::mem::size_of::<IntToStringCon>(), 0);
/// let _con = StringListCon::new();
/// ```
///
/// Unsupported shapes are rejected with a spanned error. The attribute
/// takes no arguments:
///
/// ```compile_fail
/// use tcon::tcon;
///
/// #[tcon(packed)]
/// pub struct Con {
///     pub canary: *mut u8,
/// }
/// ```
///
/// Canaries need names, so a tuple struct is rejected:
///
/// ```compile_fail
/// use tcon::tcon;
///
/// #[tcon]
/// pub struct Con(*mut u8);
/// ```
///
/// An empty declaration declares nothing and is rejected too:
///
/// ```compile_fail
/// use tcon::tcon;
///
/// #[tcon]
/// pub struct Con {}
/// ```
#[proc_macro_attribute]
pub fn tcon(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    let item = parse_macro_input!(input as ItemStruct);

    let ts = match expand_tcon(args, &item) {
        Ok(ts) => ts,
        Err(e) => e.to_compile_error(),
    };
    ts.into()
}

fn expand_tcon(
    args: proc_macro2::TokenStream,
    item: &ItemStruct,
) -> Result<proc_macro2::TokenStream, syn::Error> {
    if !args.is_empty() {
        return Err(syn::Error::new_spanned(args, "#[tcon] takes no arguments"));
    }

    let fields = match &item.fields {
        Fields::Named(named) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "#[tcon] expects a struct with named fields, one per canary",
            ))
        }
    };
    if fields.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "#[tcon] expects at least one canary declaration",
        ));
    }

    let attrs = &item.attrs;
    let vis = &item.vis;
    let ident = &item.ident;
    let generics = &item.generics;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    // Rewrite `name: T` into `name: PhantomData<T>`, keeping field
    // attributes and visibility as written.
    let decls = fields.iter().map(|f| {
        let fattrs = &f.attrs;
        let fvis = &f.vis;
        let fident = f.ident.as_ref().unwrap(); // named fields only
        let ty = &f.ty;
        quote! {
            #(#fattrs)*
            #fvis #fident: ::core::marker::PhantomData<#ty>
        }
    });
    let inits = fields.iter().map(|f| {
        let fident = f.ident.as_ref().unwrap();
        quote! { #fident: ::core::marker::PhantomData }
    });

    Ok(quote! {
        #(#attrs)*
        #vis struct #ident #generics #where_clause {
            #(#decls,)*
        }

        impl #impl_generics #ident #ty_generics #where_clause {
            /// Creates the marker value. The marker has no storage, so
            /// this compiles to nothing.
            #vis const fn new() -> Self {
                #ident {
                    #(#inits,)*
                }
            }
        }

        impl #impl_generics ::core::clone::Clone for #ident #ty_generics #where_clause {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl #impl_generics ::core::marker::Copy for #ident #ty_generics #where_clause {}

        impl #impl_generics ::core::default::Default for #ident #ty_generics #where_clause {
            fn default() -> Self {
                Self::new()
            }
        }
    })
}
