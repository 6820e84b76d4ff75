use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse_macro_input, spanned::Spanned, AttributeArgs, Error, ItemFn, Lit, LitStr, Meta, NestedMeta, Path,
};

/// Turns a handler function into a command.
///
/// ```ignore
/// #[command(name = "sub", permission = "myplugin.example.sub", max = 1, no_auto_register)]
/// pub fn sub(sender: &dyn CommandSender, args: &[&str]) -> Result<(), CommandError> { .. }
/// ```
///
/// Generates `sub_command() -> Command` and enrols it in `command_core::COMMAND_MANIFEST`.
/// Accepted arguments: `name`, `permission`, `description`, `usage`, `min`, `max`,
/// `aliases(..)`, `deny(player, console, command_block)`, `subcommands(handler, ..)`,
/// `completions = "path::to::fn"` and the `no_auto_register` flag.
#[proc_macro_attribute]
pub fn command(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as AttributeArgs);
    let func = parse_macro_input!(input as ItemFn);

    match expand(args, func) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[derive(Default)]
struct CommandArgs {
    name: Option<String>,
    permission: Option<String>,
    description: Option<String>,
    usage: Option<String>,
    min: Option<usize>,
    max: Option<usize>,
    aliases: Vec<String>,
    denied: Vec<Path>,
    subcommands: Vec<Path>,
    completions: Option<Path>,
    no_auto_register: bool,
}

fn string_value(lit: &Lit) -> Result<String, Error> {
    match lit {
        Lit::Str(s) => Ok(s.value()),
        other => Err(Error::new(other.span(), "expected a string literal")),
    }
}

fn count_value(lit: &Lit) -> Result<usize, Error> {
    match lit {
        Lit::Int(i) => i
            .base10_parse()
            .map_err(|_| Error::new(i.span(), "argument counts must be non-negative integers")),
        other => Err(Error::new(other.span(), "expected an integer literal")),
    }
}

fn parse_args(args: AttributeArgs) -> Result<CommandArgs, Error> {
    let mut parsed = CommandArgs::default();

    for arg in args {
        match arg {
            NestedMeta::Meta(Meta::NameValue(nv)) => {
                let key = nv.path.get_ident().map(|i| i.to_string()).unwrap_or_default();
                match key.as_str() {
                    "name" => parsed.name = Some(string_value(&nv.lit)?),
                    "permission" => parsed.permission = Some(string_value(&nv.lit)?),
                    "description" => parsed.description = Some(string_value(&nv.lit)?),
                    "usage" => parsed.usage = Some(string_value(&nv.lit)?),
                    "min" => parsed.min = Some(count_value(&nv.lit)?),
                    "max" => parsed.max = Some(count_value(&nv.lit)?),
                    "completions" => {
                        let path = LitStr::new(&string_value(&nv.lit)?, nv.lit.span());
                        parsed.completions = Some(path.parse()?);
                    }
                    _ => return Err(Error::new(nv.path.span(), "unknown command argument")),
                }
            }
            NestedMeta::Meta(Meta::List(ml)) => {
                let key = ml.path.get_ident().map(|i| i.to_string()).unwrap_or_default();
                for nested in ml.nested {
                    match (key.as_str(), nested) {
                        ("aliases", NestedMeta::Lit(lit)) => parsed.aliases.push(string_value(&lit)?),
                        ("deny", NestedMeta::Meta(Meta::Path(path))) => parsed.denied.push(path),
                        ("subcommands", NestedMeta::Meta(Meta::Path(path))) => parsed.subcommands.push(path),
                        (_, other) => return Err(Error::new(other.span(), "unexpected entry in command argument list")),
                    }
                }
            }
            NestedMeta::Meta(Meta::Path(path)) if path.is_ident("no_auto_register") => {
                parsed.no_auto_register = true;
            }
            other => return Err(Error::new(other.span(), "unknown command argument")),
        }
    }

    Ok(parsed)
}

fn constructor_ident(handler: &Ident) -> Ident {
    Ident::new(&format!("{}_command", handler), handler.span())
}

/// `a::b::handler` becomes `a::b::handler_command`.
fn constructor_path(handler: &Path) -> Path {
    let mut path = handler.clone();
    if let Some(last) = path.segments.last_mut() {
        last.ident = constructor_ident(&last.ident);
    }
    path
}

fn source_variant(path: &Path) -> Result<TokenStream2, Error> {
    match path.get_ident().map(|i| i.to_string()).as_deref() {
        Some("player") => Ok(quote! { ::command_core::CommandSource::Player }),
        Some("console") => Ok(quote! { ::command_core::CommandSource::Console }),
        Some("command_block") => Ok(quote! { ::command_core::CommandSource::CommandBlock }),
        _ => Err(Error::new(path.span(), "expected one of `player`, `console`, `command_block`")),
    }
}

fn expand(args: AttributeArgs, func: ItemFn) -> Result<TokenStream2, Error> {
    let args = parse_args(args)?;

    let fn_name = &func.sig.ident;
    let vis = &func.vis;
    let ctor_name = constructor_ident(fn_name);
    let static_name = Ident::new(
        &format!("REGISTERED_COMMAND_{}", fn_name.to_string().to_uppercase()),
        Span::call_site(),
    );

    let name = args
        .name
        .unwrap_or_else(|| fn_name.to_string().trim_start_matches("cmd_").to_case(Case::Kebab));
    if name.trim().is_empty() {
        return Err(Error::new(fn_name.span(), "command names cannot be empty"));
    }
    let permission = args.permission.unwrap_or_default();
    let auto_register = !args.no_auto_register;

    let aliases = (!args.aliases.is_empty()).then(|| {
        let aliases = &args.aliases;
        quote! { .add_aliases([ #( #aliases ),* ]) }
    });
    let description = args.description.map(|d| quote! { .set_description(#d) });
    let usage = args.usage.map(|u| quote! { .set_usage(#u) });
    let min = args.min.map(|m| quote! { .set_min_args(#m) });
    let max = args.max.map(|m| quote! { .set_max_args(#m) });

    let denied = args.denied.iter().map(source_variant).collect::<Result<Vec<_>, _>>()?;
    let denied = (!denied.is_empty()).then(|| quote! { .remove_permitted_sources([ #( #denied ),* ]) });

    let subcommands = args.subcommands.iter().map(constructor_path).collect::<Vec<_>>();
    let subcommands = (!subcommands.is_empty()).then(|| quote! { .add_sub_commands([ #( #subcommands() ),* ]) });

    let completions = args.completions.map(|path| quote! { .set_completions(#path()) });

    let expanded = quote! {
        #func

        #vis fn #ctor_name() -> ::command_core::Command {
            ::command_core::Command::from_fn(#name, #permission, #fn_name)
                #aliases
                #description
                #usage
                #denied
                #min
                #max
                #subcommands
                #completions
        }

        #[linkme::distributed_slice(::command_core::COMMAND_MANIFEST)]
        static #static_name: ::command_core::CommandEntry = ::command_core::CommandEntry {
            name: #name,
            module_path: ::core::module_path!(),
            auto_register: #auto_register,
            constructor: #ctor_name,
        };
    };

    Ok(expanded)
}
