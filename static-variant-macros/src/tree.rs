use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::common::Member;

/// Generates the value-tree bridge: the union externalizes as the 2-element
/// array `[tag, value]`, threading a decremented recursion budget into the
/// live member's own conversion.
pub fn doit(ident: &Ident, members: &[Member]) -> TokenStream {
    let to_arms = members.iter().map(|Member { id, .. }| {
        quote! {
            #ident::#id(value) => ::static_variant::ToTree::to_tree(value, max_depth - 1)?
        }
    });
    let from_arms = members.iter().map(|Member { id, .. }| {
        quote! {
            #ident::#id(value) => ::static_variant::FromTree::from_tree(value, &items[1], max_depth - 1)
        }
    });

    quote! {
        impl ::static_variant::ToTree for #ident {
            fn to_tree(&self, max_depth: u32) -> ::core::result::Result<::static_variant::Value, ::static_variant::VariantError> {
                if max_depth == 0 {
                    return ::core::result::Result::Err(::static_variant::VariantError::DepthExhausted {
                        container: <Self as ::static_variant::StaticVariant>::NAME,
                    });
                }
                let tag = ::static_variant::StaticVariant::which(self) as u64;
                let value = match self {
                    #(#to_arms),*
                };
                ::core::result::Result::Ok(::static_variant::Value::Array(::std::vec![
                    ::static_variant::Value::from(tag),
                    value,
                ]))
            }
        }

        impl ::static_variant::FromTree for #ident {
            fn from_tree(&mut self, tree: &::static_variant::Value, max_depth: u32) -> ::core::result::Result<(), ::static_variant::VariantError> {
                if max_depth == 0 {
                    return ::core::result::Result::Err(::static_variant::VariantError::DepthExhausted {
                        container: <Self as ::static_variant::StaticVariant>::NAME,
                    });
                }
                let items = tree
                    .as_array()
                    .ok_or_else(|| ::static_variant::VariantError::UnexpectedTree {
                        expected: "array",
                        found: ::static_variant::tree_kind(tree),
                    })?;
                // Deliberate compatibility quirk: a short array leaves the
                // union untouched instead of reporting an error.
                if items.len() < 2 {
                    return ::core::result::Result::Ok(());
                }
                let raw_tag = items[0]
                    .as_u64()
                    .ok_or_else(|| ::static_variant::VariantError::UnexpectedTree {
                        expected: "unsigned integer tag",
                        found: ::static_variant::tree_kind(&items[0]),
                    })?;
                let tag = <usize as ::core::convert::TryFrom<u64>>::try_from(raw_tag).map_err(
                    |_| ::static_variant::VariantError::UnexpectedTree {
                        expected: "unsigned integer tag",
                        found: "out-of-range number",
                    },
                )?;
                ::static_variant::StaticVariant::set_which(self, tag)?;
                match self {
                    #(#from_arms),*
                }
            }
        }
    }
}
