use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Declare a color model.
///
/// Fields may carry a `#[range(..)]` attribute holding any range expression
/// over the field's type. The ranges drive the generated `is_valid` and
/// `validate` functions. Fields without a range are never rejected.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.")
        }
        .into();
    }

    let mut field_names = vec![];
    let mut field_types = vec![];
    let mut checks = vec![];

    for field in input.fields.iter_mut() {
        // Make sure the specified fields are public.
        field.vis = syn::Visibility::Public(Default::default());

        let name = field.ident.clone();
        let ty = field.ty.clone();

        let mut range = None;
        let mut attrs = vec![];
        for attr in field.attrs.drain(..) {
            if attr.path().is_ident("range") {
                match attr.parse_args::<syn::Expr>() {
                    Ok(expr) => range = Some(expr),
                    Err(err) => return err.to_compile_error().into(),
                }
            } else {
                attrs.push(attr);
            }
        }
        field.attrs = attrs;

        if let Some(range) = range {
            checks.push(quote! {
                ::core::ops::RangeBounds::<#ty>::contains(&(#range), &self.#name)
            });
        }

        field_names.push(name);
        field_types.push(ty);
    }

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        for param in input.generics.params.iter() {
            let syn::GenericParam::Type(type_param) = param else {
                return quote! {
                    compile_error!("Models only support type parameters.")
                }
                .into();
            };

            let ident = &type_param.ident;
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            named.named.push(
                syn::Field::parse_named
                    .parse2(quote! {
                        #field_name: ::core::marker::PhantomData<#ident>
                    })
                    .unwrap(),
            );
        }
    } else {
        return quote! {
            compile_error!("Models must use named fields.")
        }
        .into();
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();
    let count = field_names.len();
    let indices = (0..count).map(syn::Index::from).collect::<Vec<_>>();

    let generated = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model.
            pub fn new(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names,)*
                    #(#phantom_fields: ::core::marker::PhantomData,)*
                }
            }

            /// Returns true if every component lies within its declared range.
            pub fn is_valid(&self) -> bool {
                true #(&& #checks)*
            }

            /// Fail with [`crate::ConvertError::InvalidValue`] if any component
            /// lies outside its declared range.
            pub fn validate(&self) -> ::core::result::Result<(), crate::error::ConvertError>
            where
                Self: crate::color::HasSpace + ::core::fmt::Debug,
            {
                if self.is_valid() {
                    Ok(())
                } else {
                    Err(crate::error::ConvertError::out_of_range(self))
                }
            }
        }

        impl #impl_gen From<(#(#field_types),*)> for #struct_name #type_gen #where_clause {
            fn from((#(#field_names),*): (#(#field_types),*)) -> Self {
                Self::new(#(#field_names),*)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for (#(#field_types),*) #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                (#(value.#field_names),*)
            }
        }

        impl #impl_gen ::core::str::FromStr for #struct_name #type_gen #where_clause {
            type Err = crate::error::ParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                let parts = s
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>();

                if parts.len() != #count {
                    return Err(crate::error::ParseError::Components {
                        expected: #count,
                        got: parts.len(),
                    });
                }

                Ok(Self::new(#(
                    parts[#indices]
                        .parse::<#field_types>()
                        .map_err(|_| crate::error::ParseError::Number(parts[#indices].to_string()))?
                ),*))
            }
        }
    };

    quote! {
        #input
        #generated
    }
    .into()
}
