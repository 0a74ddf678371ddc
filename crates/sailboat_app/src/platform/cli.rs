/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Browse { initial_query: Option<String> },
    Usage { program: String },
}

/// `sailboat [url]`: at most one positional query; anything else, or a help
/// flag, asks for the usage text.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Invocation {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "sailboat".to_string());
    let rest: Vec<String> = args.collect();

    match rest.as_slice() {
        [] => Invocation::Browse {
            initial_query: None,
        },
        [flag] if flag == "-h" || flag == "--help" => Invocation::Usage { program },
        [query] => Invocation::Browse {
            initial_query: Some(query.clone()),
        },
        _ => Invocation::Usage { program },
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} [url]")
}
