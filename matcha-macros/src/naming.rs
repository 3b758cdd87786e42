//! Identifier helpers for generated code.

use proc_macro2::{Ident, Span};
use syn::{Generics, ext::IdentExt};

/// Keywords that can be used as identifiers only in raw form.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers at all.
const RESERVED_PATHS: &[&str] = &["crate", "self", "super"];

/// Convert an UpperCamelCase variant name to snake_case.
///
/// Acronyms stay together: `HTTPServer` becomes `http_server`.
pub(crate) fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                Some(_) => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// The field name of the handler for a variant.
pub(crate) fn handler_field(variant: &Ident) -> Ident {
    let name = snake_case(&variant.unraw().to_string());
    if RESERVED_PATHS.contains(&name.as_str()) {
        Ident::new(&format!("{name}_"), variant.span())
    } else if RAW_KEYWORDS.contains(&name.as_str()) {
        Ident::new_raw(&name, variant.span())
    } else {
        Ident::new(&name, variant.span())
    }
}

/// The generic parameter holding the handler for a variant.
///
/// Always `__H` followed by the variant name, so it cannot collide with
/// [`result_param`].
pub(crate) fn handler_param(variant: &Ident) -> Ident {
    Ident::new(&format!("__H{}", variant.unraw()), Span::call_site())
}

/// The generic parameter for the result type shared by all handlers.
///
/// Starts as `__R` and grows until no generic of the enum uses the name.
pub(crate) fn result_param(generics: &Generics) -> Ident {
    let mut name = String::from("__R");
    while generics.type_params().any(|p| p.ident == name) {
        name.push('_');
    }
    Ident::new(&name, Span::call_site())
}

/// The binding for the `index`th payload field of a variant.
pub(crate) fn payload_binding(index: usize) -> Ident {
    Ident::new(&format!("__field{}", index), Span::call_site())
}
