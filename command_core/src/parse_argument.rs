use crate::CommandError;

/// Typed view over a raw argument token.
///
/// Failures carry the argument name and the simple name of the required type, which the
/// dispatcher reports back to the sender.
pub trait ParseArgument<'a>: Sized {
    const TYPE_NAME: &'static str;

    fn parse(s: &'a str) -> Option<Self>;
}

/// Parses `args[index]` as `T`, naming the argument `name` in the error.
///
/// A missing token is a usage error rather than a type error.
pub fn arg<'a, T: ParseArgument<'a>>(args: &[&'a str], index: usize, name: &str) -> Result<T, CommandError> {
    let raw = args.get(index).copied().ok_or(CommandError::IllegalUsage)?;
    T::parse(raw).ok_or_else(|| CommandError::illegal_argument(name, T::TYPE_NAME))
}

/// Like [`arg`], but an absent token yields `None`.
pub fn optional_arg<'a, T: ParseArgument<'a>>(args: &[&'a str], index: usize, name: &str) -> Result<Option<T>, CommandError> {
    match args.get(index).copied() {
        Some(raw) => T::parse(raw)
            .map(Some)
            .ok_or_else(|| CommandError::illegal_argument(name, T::TYPE_NAME)),
        None => Ok(None),
    }
}

impl<'a> ParseArgument<'a> for &'a str {
    const TYPE_NAME: &'static str = "String";

    fn parse(s: &'a str) -> Option<Self> {
        Some(s)
    }
}

impl<'a> ParseArgument<'a> for String {
    const TYPE_NAME: &'static str = "String";

    fn parse(s: &str) -> Option<Self> {
        Some(s.to_string())
    }
}

impl<'a> ParseArgument<'a> for char {
    const TYPE_NAME: &'static str = "char";

    fn parse(s: &'a str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl<'a> ParseArgument<'a> for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        }
    }
}

macro_rules! impl_parse_number {
    ($($t:ty),*) => {
        $(
            impl<'a> ParseArgument<'a> for $t {
                const TYPE_NAME: &'static str = stringify!($t);

                fn parse(s: &str) -> Option<Self> {
                    s.parse().ok()
                }
            }
        )*
    };
}

impl_parse_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_parse_number!(f32, f64);
