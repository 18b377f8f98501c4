//! Descriptor text rendering.

use didscan_core::{Colors, ProcedureSignature, TypeExpr};

use super::EmitConfig;

/// Renders translated signatures into service descriptor text.
pub struct Emitter<'a> {
    config: &'a EmitConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    /// Render the whole descriptor.
    ///
    /// Lines keep the order of `signatures`. An empty slice still yields a
    /// well-formed service with an empty body.
    pub fn emit(&self, signatures: &[ProcedureSignature]) -> String {
        let c = self.c();
        let lines: Vec<String> = signatures.iter().map(|s| self.line(s)).collect();
        format!(
            "{}service :{} {}{{{}\n{}\n{}}}{}\n",
            c.dim,
            c.reset,
            c.dim,
            c.reset,
            lines.join("\n"),
            c.dim,
            c.reset
        )
    }

    /// One `"name" : (params) -> (ret) mode;` line, indented by two spaces.
    pub fn line(&self, signature: &ProcedureSignature) -> String {
        let c = self.c();
        let separator = format!("{}, {}", c.dim, c.reset);
        let params: Vec<String> = signature
            .parameters
            .iter()
            .map(|p| self.render_type(p))
            .collect();

        format!(
            "  {}\"{}\"{} {}:{} {}({}{}{}){} {}->{} {}({}{}{}){} {}{};{}",
            c.green,
            signature.exported_name,
            c.reset,
            c.dim,
            c.reset,
            c.dim,
            c.reset,
            params.join(&separator),
            c.dim,
            c.reset,
            c.dim,
            c.reset,
            c.dim,
            c.reset,
            self.render_type(&signature.return_type),
            c.dim,
            c.reset,
            c.dim,
            signature.mode,
            c.reset
        )
    }

    /// Render a top-level parameter or return type. Unit renders as nothing.
    pub fn render_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Unit => String::new(),
            _ => self.render_nested(ty),
        }
    }

    fn render_nested(&self, ty: &TypeExpr) -> String {
        let c = self.c();
        match ty {
            TypeExpr::Primitive(p) => format!("{}{}{}", c.blue, p.idl_name(), c.reset),
            TypeExpr::Vector(inner) => {
                format!("{}vec{} {}", c.blue, c.reset, self.render_nested(inner))
            }
            TypeExpr::Optional(inner) => {
                format!("{}opt{} {}", c.blue, c.reset, self.render_nested(inner))
            }
            TypeExpr::ByteVector => format!("{}blob{}", c.blue, c.reset),
            // The closed IDL grammar has no name for a nested empty tuple.
            TypeExpr::Unit | TypeExpr::Opaque(_) => {
                format!("{}{}{}", c.blue, self.config.placeholder, c.reset)
            }
        }
    }
}
