/// Long flags that are also accepted with a single dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["insecure", "keep-going"];

/// Rewrites `-insecure` to `--insecure` (and likewise for the other long
/// flags) so clap can parse them. Everything after `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.strip_prefix('-') {
                Some(name) if SINGLE_DASH_LONG_FLAGS.contains(&name) => format!("--{}", name),
                _ => arg,
            }
        })
        .collect()
}
