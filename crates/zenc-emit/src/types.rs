//! C type mapping and the declaration-omits-a-type inference rule.

use zenc_par::Expr;
use zenc_util::Symbol;

/// Maps a Zen type name to its C spelling. Struct and enum names, and any
/// other identifier the emitter doesn't recognize, are used verbatim — they
/// are expected to have a matching `typedef` emitted elsewhere in the file.
pub fn c_type_name(ty: Symbol) -> String {
    match ty.as_str() {
        "i32" => "int".to_string(),
        "i64" => "long".to_string(),
        "f32" => "float".to_string(),
        "f64" => "double".to_string(),
        "bool" => "bool".to_string(),
        "string" => "const char*".to_string(),
        other => other.to_string(),
    }
}

/// Infers a C type for a variable declaration that omits one, from the
/// shape of its initializer. Anything that isn't a recognizable literal
/// form falls back to `int`.
pub fn infer_type(init: &Expr) -> String {
    match init {
        Expr::Number(sym) if sym.as_str().contains('.') => "double".to_string(),
        Expr::Number(_) => "int".to_string(),
        Expr::Str(_) => "const char*".to_string(),
        Expr::Bool(_) => "bool".to_string(),
        Expr::StructLit { ty, .. } => ty.as_str().to_string(),
        _ => "int".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_primitive_types() {
        assert_eq!(c_type_name(Symbol::intern("i32")), "int");
        assert_eq!(c_type_name(Symbol::intern("i64")), "long");
        assert_eq!(c_type_name(Symbol::intern("f32")), "float");
        assert_eq!(c_type_name(Symbol::intern("f64")), "double");
        assert_eq!(c_type_name(Symbol::intern("bool")), "bool");
        assert_eq!(c_type_name(Symbol::intern("string")), "const char*");
    }

    #[test]
    fn unknown_type_name_used_verbatim() {
        assert_eq!(c_type_name(Symbol::intern("Point")), "Point");
    }

    #[test]
    fn infers_int_for_integer_literal() {
        assert_eq!(infer_type(&Expr::Number(Symbol::intern("10"))), "int");
    }

    #[test]
    fn infers_double_for_decimal_literal() {
        assert_eq!(infer_type(&Expr::Number(Symbol::intern("1.0"))), "double");
    }

    #[test]
    fn infers_const_char_ptr_for_string() {
        assert_eq!(
            infer_type(&Expr::Str(Symbol::intern("hi"))),
            "const char*"
        );
    }

    #[test]
    fn infers_bool_for_boolean_literal() {
        assert_eq!(infer_type(&Expr::Bool(true)), "bool");
    }

    #[test]
    fn infers_struct_type_from_struct_literal() {
        let lit = Expr::StructLit {
            ty: Symbol::intern("Point"),
            fields: Vec::new(),
        };
        assert_eq!(infer_type(&lit), "Point");
    }
}
