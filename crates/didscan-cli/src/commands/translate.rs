use didscan_lib::{EmitConfig, Emitter, translate};

pub struct TranslateArgs {
    pub types: Vec<String>,
    pub placeholder: String,
    pub color: bool,
}

pub fn run(args: TranslateArgs) {
    let config = EmitConfig::new()
        .placeholder(args.placeholder)
        .colored(args.color);
    print!("{}", format_translations(&args.types, &config));
}

/// `<source type>: <IDL type>` per token. Unit shows as `()` since it renders as nothing.
pub fn format_translations(types: &[String], config: &EmitConfig) -> String {
    let emitter = Emitter::new(config);
    let mut out = String::new();
    for token in types {
        let ty = translate(token);
        let rendered = if ty.is_unit() {
            "()".to_string()
        } else {
            emitter.render_type(&ty)
        };
        out.push_str(&format!("{}: {}\n", token.trim(), rendered));
    }
    out
}
