use worship_direct_convert::{ResultSetConverter, cli};

fn main() {
    cli::main_for("convert-asv-to-nested", &ResultSetConverter);
}
