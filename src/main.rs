// SPDX-License-Identifier: MPL-2.0
use vitrine::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        page: args.opt_value_from_str("--page").unwrap_or(None),
        touch: args.contains("--touch"),
    };

    app::run(flags)
}
