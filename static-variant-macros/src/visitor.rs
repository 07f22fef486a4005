use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, Type, Visibility};

use crate::common::{self, Member};

/// Generates the per-union visitor traits and the `visit`/`visit_mut`
/// dispatchers. The match on the enum discriminant is the jump table; no
/// caller ever branches over the member list by hand.
pub fn doit(vis: &Visibility, ident: &Ident, members: &[Member]) -> TokenStream {
    let visitor_ident = format_ident!("{ident}Visitor");
    let visitor_mut_ident = format_ident!("{ident}VisitorMut");
    let ids: Vec<&Ident> = members.iter().map(|member| &member.id).collect();
    let tys: Vec<&Type> = members.iter().map(|member| &member.ty).collect();
    let methods: Vec<Ident> = members
        .iter()
        .map(|member| common::snake_ident(&member.id))
        .collect();

    let visitor_doc = format!(
        "Visitor over a [`{ident}`]: one method per member type, all returning \
         the same `Output`."
    );
    let visitor_mut_doc = format!(
        "Mutating visitor over a [`{ident}`]: as [`{visitor_ident}`], but each \
         method receives the live value by `&mut`."
    );

    quote! {
        #[doc = #visitor_doc]
        #vis trait #visitor_ident {
            type Output;
            #(fn #methods(&mut self, value: &#tys) -> Self::Output;)*
        }

        #[doc = #visitor_mut_doc]
        #vis trait #visitor_mut_ident {
            type Output;
            #(fn #methods(&mut self, value: &mut #tys) -> Self::Output;)*
        }

        impl #ident {
            /// Invokes the visitor method matching the live member type.
            #vis fn visit<V: #visitor_ident>(&self, visitor: &mut V) -> V::Output {
                match self {
                    #(#ident::#ids(value) => visitor.#methods(value)),*
                }
            }

            /// As [`Self::visit`], with mutable access to the live value.
            #vis fn visit_mut<V: #visitor_mut_ident>(&mut self, visitor: &mut V) -> V::Output {
                match self {
                    #(#ident::#ids(value) => visitor.#methods(value)),*
                }
            }
        }
    }
}
