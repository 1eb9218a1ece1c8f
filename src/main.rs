//! Punto de entrada principal.
use anyhow::Result;
use clap::Parser;
use domain2ip::{
    args::Args,
    output::{build_result_set, save_ips},
    resolver::resolve_many_with_progress,
    targets::load_domains,
};

fn print_banner() {
    let banner = r#"
     _                       _       ____  _
  __| | ___  _ __ ___   __ _(_)_ __ |___ \(_)_ __
 / _` |/ _ \| '_ ` _ \ / _` | | '_ \  __) | | '_ \
| (_| | (_) | | | | | | (_| | | | | |/ __/| | |_) |
 \__,_|\___/|_| |_| |_|\__,_|_|_| |_|_____|_| .__/
                                            |_|
 Dominio a IP | recon rápido para BB/pentest
"#;
    println!("{banner}");
}

#[tokio::main]
async fn main() -> Result<()> {
    print_banner();
    let args = Args::parse();

    let domains = load_domains(&args.input).await?;
    println!("[*] {} dominios cargados desde {}", domains.len(), args.input.display());

    let results = resolve_many_with_progress(&domains, args.threads).await?;
    let resolved = build_result_set(results);

    save_ips(&args.output, &resolved)?;
    println!("[+] IPs guardadas en {}", args.output.display());
    Ok(())
}
