use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::Parser, punctuated::Punctuated, Error, Ident, ItemEnum, Meta, Result, Token, Type,
};
use tap::prelude::*;

use crate::common::{self, Member};
use crate::{tree, visitor};

type Args = Punctuated<Meta, Token![,]>;

pub fn doit(args: TokenStream, item_enum: ItemEnum) -> Result<TokenStream> {
    let options = Options::try_from(Args::parse_terminated.parse2(args)?)?;
    let members = common::members(&item_enum)?;

    let ItemEnum {
        attrs,
        vis,
        enum_token,
        ident,
        generics,
        ..
    } = &item_enum;
    if !generics.params.is_empty() {
        Err(Error::new_spanned(
            generics,
            "static_variant does not support generic parameters",
        ))?
    }

    let conversion_impls = members.iter().map(|member| {
        if options.implement_conversion {
            conversion_impl(ident, member)
        } else {
            quote!()
        }
    });
    let catalog = catalog_impls(ident, &members);
    let container = container_impls(vis, ident, &members);
    let visitor_items = visitor::doit(vis, ident, &members);
    let tree_impls = if options.implement_tree {
        tree::doit(ident, &members)
    } else {
        quote!()
    };

    Ok(quote! {
        #(#attrs)*
        #vis #enum_token #ident {
            #(#members),*
        }
        #(#conversion_impls)*
    }
    .tap_mut(|output| output.extend(catalog))
    .tap_mut(|output| output.extend(container))
    .tap_mut(|output| output.extend(visitor_items))
    .tap_mut(|output| output.extend(tree_impls)))
}

struct Options {
    implement_conversion: bool,
    implement_tree: bool,
}

impl TryFrom<Args> for Options {
    type Error = Error;
    fn try_from(args: Args) -> std::result::Result<Self, Self::Error> {
        let mut options = Options {
            implement_conversion: true,
            implement_tree: true,
        };
        for arg in args {
            let ident = common::ident(&arg)?;
            match ident.to_string().as_str() {
                "no_impl" => options.implement_conversion = false,
                "no_tree" => options.implement_tree = false,
                _ => Err(Error::new_spanned(
                    ident,
                    "static_variant: unrecognized parameter; valid parameters are `no_impl` and `no_tree`",
                ))?,
            }
        }
        Ok(options)
    }
}

/// `StaticVariant` plus one `VariantOf` per member: the tag positions, the
/// name strings, and the checked narrowing accessors `get` builds on.
fn catalog_impls(ident: &Ident, members: &[Member]) -> TokenStream {
    let count = members.len();
    let tags: Vec<usize> = (0..count).collect();
    let ids: Vec<&Ident> = members.iter().map(|member| &member.id).collect();
    let tys: Vec<&Type> = members.iter().map(|member| &member.ty).collect();
    let names: Vec<String> = members
        .iter()
        .map(|member| common::type_name(&member.ty))
        .collect();
    let container_name = format!("static_variant<{}>", names.join(","));

    let variant_of_impls = tags.iter().zip(ids.iter().zip(tys.iter())).map(|(tag, (id, ty))| {
        let name = common::type_name(ty);
        quote! {
            impl ::static_variant::VariantOf<#ident> for #ty {
                const TAG: usize = #tag;
                const NAME: &'static str = #name;

                #[allow(unreachable_patterns)]
                fn variant_ref(container: &#ident) -> ::core::option::Option<&Self> {
                    match container {
                        #ident::#id(value) => ::core::option::Option::Some(value),
                        _ => ::core::option::Option::None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn variant_mut(container: &mut #ident) -> ::core::option::Option<&mut Self> {
                    match container {
                        #ident::#id(value) => ::core::option::Option::Some(value),
                        _ => ::core::option::Option::None,
                    }
                }
            }
        }
    });

    quote! {
        impl ::static_variant::StaticVariant for #ident {
            const COUNT: usize = #count;
            const NAME: &'static str = #container_name;

            fn type_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn which(&self) -> usize {
                match self {
                    #(#ident::#ids(..) => #tags),*
                }
            }

            fn set_which(&mut self, tag: usize) -> ::core::result::Result<(), ::static_variant::VariantError> {
                match tag {
                    #(#tags => {
                        *self = #ident::#ids(<#tys as ::core::default::Default>::default());
                        ::core::result::Result::Ok(())
                    })*
                    _ => ::core::result::Result::Err(::static_variant::VariantError::InvalidTag {
                        container: <Self as ::static_variant::StaticVariant>::NAME,
                        tag,
                        count: <Self as ::static_variant::StaticVariant>::COUNT,
                    }),
                }
            }
        }

        #(#variant_of_impls)*
    }
}

/// The container protocol the compiler does not already provide for a native
/// enum: default construction at tag 0, tag-only comparison, and the
/// superset conversion that replaces copy-construction across member lists.
fn container_impls(vis: &syn::Visibility, ident: &Ident, members: &[Member]) -> TokenStream {
    let Member {
        id: first_id,
        ty: first_ty,
        ..
    } = &members[0];
    let ids: Vec<&Ident> = members.iter().map(|member| &member.id).collect();
    let from_bounds = members.iter().map(|member| {
        let ty = &member.ty;
        quote!(::core::convert::From<#ty>)
    });
    let clone_bounds = members.iter().map(|member| {
        let ty = &member.ty;
        quote!(#ty: ::core::clone::Clone)
    });

    quote! {
        impl ::core::default::Default for #ident {
            fn default() -> Self {
                #ident::#first_id(<#first_ty as ::core::default::Default>::default())
            }
        }

        impl ::core::cmp::PartialEq for #ident {
            fn eq(&self, other: &Self) -> bool {
                ::static_variant::StaticVariant::which(self)
                    == ::static_variant::StaticVariant::which(other)
            }
        }

        impl ::core::cmp::Eq for #ident {}

        impl ::core::cmp::PartialOrd for #ident {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for #ident {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(
                    &::static_variant::StaticVariant::which(self),
                    &::static_variant::StaticVariant::which(other),
                )
            }
        }

        impl #ident {
            /// Clones the live value into any union declaring a superset of
            /// this union's member types.
            #vis fn convert_into<U>(&self) -> U
            where
                U: #(#from_bounds)+*,
                #(#clone_bounds),*
            {
                match self {
                    #(#ident::#ids(value) => U::from(::core::clone::Clone::clone(value))),*
                }
            }
        }
    }
}

fn conversion_impl(ident: &Ident, member: &Member) -> TokenStream {
    let Member { id, ty, .. } = member;
    quote! {
        impl ::core::convert::From<#ty> for #ident {
            fn from(value: #ty) -> Self {
                #ident::#id(value)
            }
        }

        impl ::core::convert::TryFrom<#ident> for #ty {
            type Error = #ident;

            #[allow(irrefutable_let_patterns)]
            fn try_from(value: #ident) -> ::core::result::Result<Self, Self::Error> {
                if let #ident::#id(value) = value {
                    ::core::result::Result::Ok(value)
                } else {
                    ::core::result::Result::Err(value)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(item_enum: ItemEnum) -> Result<TokenStream> {
        doit(TokenStream::new(), item_enum)
    }

    #[test]
    fn rejects_duplicate_member_types() {
        let err = expand(parse_quote! {
            enum Bad {
                First(u32),
                Second(u32),
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("must be distinct"), "{err}");
    }

    #[test]
    fn rejects_reference_member_types() {
        let err = expand(parse_quote! {
            enum Bad {
                Borrowed(&'static str),
                Owned(String),
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("reference types"), "{err}");
    }

    #[test]
    fn rejects_named_fields() {
        let err = expand(parse_quote! {
            enum Bad {
                Point { x: u32 },
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("named fields"), "{err}");
    }

    #[test]
    fn rejects_multi_field_tuple_variants() {
        let err = expand(parse_quote! {
            enum Bad {
                Pair(u32, u32),
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("exactly 1 field"), "{err}");
    }

    #[test]
    fn rejects_empty_member_list() {
        let err = expand(parse_quote! {
            enum Bad {}
        })
        .unwrap_err();
        assert!(err.to_string().contains("at least one"), "{err}");
    }

    #[test]
    fn rejects_generic_unions() {
        let err = expand(parse_quote! {
            enum Bad<T> {
                Inner(T),
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("generic"), "{err}");
    }

    #[test]
    fn rejects_unrecognized_parameters() {
        let item: ItemEnum = parse_quote! {
            enum Fine {
                Number(i64),
            }
        };
        let err = doit(quote!(no_such_flag), item).unwrap_err();
        assert!(err.to_string().contains("unrecognized parameter"), "{err}");
    }

    #[test]
    fn no_tree_suppresses_the_bridge() {
        let item: ItemEnum = parse_quote! {
            enum Fine {
                Number(i64),
            }
        };
        let output = doit(quote!(no_tree), item).unwrap().to_string();
        assert!(!output.contains("ToTree"), "{output}");
        assert!(output.contains("StaticVariant"), "{output}");
    }

    #[test]
    fn no_impl_suppresses_conversions() {
        let item: ItemEnum = parse_quote! {
            enum Fine {
                Number(i64),
            }
        };
        let output = doit(quote!(no_impl), item).unwrap().to_string();
        assert!(!output.contains("TryFrom"), "{output}");
        assert!(output.contains("ToTree"), "{output}");
    }

    #[test]
    fn generates_the_container_contract() {
        let output = expand(parse_quote! {
            enum Operation {
                Transfer(Transfer),
                Vote(Vote),
            }
        })
        .unwrap()
        .to_string();
        assert!(output.contains("static_variant<Transfer,Vote>"), "{output}");
        assert!(output.contains("OperationVisitor"), "{output}");
        assert!(output.contains("set_which"), "{output}");
        assert!(output.contains("convert_into"), "{output}");
    }
}
