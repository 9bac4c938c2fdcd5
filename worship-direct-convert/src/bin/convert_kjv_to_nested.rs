use worship_direct_convert::{FlatKeyConverter, cli};

fn main() {
    cli::main_for("convert-kjv-to-nested", &FlatKeyConverter);
}
