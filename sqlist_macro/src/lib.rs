//! Macro `sqlist!` for writing fixed-capacity lists as literals.
//!
//! See [`sqlist` crate](https://docs.rs/sqlist).

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Ident, Lit, Token};

/// Builds a `SqList` from a list of elements, in order.
///
/// # Examples
///
/// Without a capacity, the list always has capacity `sqlist::DEFAULT_CAPACITY`. The
/// capacity is not inferred from a type annotation:
///
/// ```
/// use sqlist::{sqlist, SqList, DEFAULT_CAPACITY};
/// let list: SqList<i32> = sqlist![10, 99, 20, 30];
/// assert_eq!(list.as_slice(), &[10, 99, 20, 30]);
/// assert_eq!(list.capacity(), DEFAULT_CAPACITY);
/// ```
///
/// ```compile_fail
/// use sqlist::{sqlist, SqList};
/// let list: SqList<u8, 4> = sqlist![1, 2];
/// ```
///
/// Write `sqlist![1, 2; capacity = 4]` for that instead.
///
/// With an explicit capacity, given after a semicolon:
///
/// ```
/// use sqlist::{sqlist, SqList};
/// let mut list = sqlist!['a', 'b'; capacity = 3];
/// list.push('c').unwrap();
/// assert!(list.is_full());
/// # let _: &SqList<char, 3> = &list;
/// ```
///
/// More elements than capacity is a compile error when the capacity is an integer
/// literal or the default:
///
/// ```compile_fail
/// use sqlist::sqlist;
/// let list = sqlist![1, 2, 3; capacity = 2];
/// ```
///
/// # Generated code
///
/// The macro expands to a call to `sqlist::macro_support::from_array::<_, C, N>`, where
/// `C` is the capacity and `N` the number of elements. When the capacity is any other
/// const expression, the element count is only checked at run time, by a panic.
#[proc_macro]
pub fn sqlist(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input: TokenStream = input.into();
    match sqlist_impl(input) {
        Ok(x) => x,
        Err(Error(msg, span)) => quote_spanned!(span =>
            ::core::compile_error!(#msg)
        ),
    }
    .into()
}

struct Error(&'static str, Span);

struct ListLiteral {
    elems: Vec<Expr>,
    capacity: Option<Expr>,
}

impl Parse for ListLiteral {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut elems = Vec::new();
        while !input.is_empty() && !input.peek(Token![;]) {
            elems.push(input.parse::<Expr>()?);
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            } else {
                break;
            }
        }
        let capacity = if input.peek(Token![;]) {
            input.parse::<Token![;]>()?;
            let key: Ident = input.parse()?;
            if key != "capacity" {
                return Err(syn::Error::new(key.span(), "expected `capacity`"));
            }
            input.parse::<Token![=]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };
        if !input.is_empty() {
            return Err(input.error("unexpected tokens"));
        }
        Ok(ListLiteral { elems, capacity })
    }
}

fn literal_capacity(capacity: &Expr) -> Result<Option<usize>, Error> {
    match capacity {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => lit
            .base10_parse::<usize>()
            .map(Some)
            .map_err(|_| Error("sqlist! capacity must fit in a usize", lit.span())),
        _ => Ok(None),
    }
}

fn sqlist_impl(input: TokenStream) -> Result<TokenStream, Error> {
    let ListLiteral { elems, capacity } = match syn::parse2(input) {
        Ok(x) => x,
        Err(e) => {
            return Err(Error(
                "sqlist! expects `elem, elem, ...` optionally followed by `; capacity = N`",
                e.span(),
            ))
        }
    };
    let n = elems.len();

    let capacity = match capacity {
        None => {
            return Ok(quote!({
                const _: () = ::core::assert!(
                    #n <= ::sqlist::DEFAULT_CAPACITY,
                    "sqlist! has more elements than the default capacity",
                );
                ::sqlist::macro_support::from_array::<_, { ::sqlist::DEFAULT_CAPACITY }, #n>(
                    [#(#elems),*]
                )
            }));
        }
        Some(capacity) => capacity,
    };

    if let Some(cap) = literal_capacity(&capacity)? {
        if n > cap {
            return Err(Error(
                "sqlist! has more elements than its capacity",
                elems[cap].span(),
            ));
        }
    }
    Ok(quote!(
        ::sqlist::macro_support::from_array::<_, { #capacity }, #n>([#(#elems),*])
    ))
}
