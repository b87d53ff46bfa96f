use clap::Parser;
use tcg_renamer::{cli, client, logger, pipeline};
use cli::Cli;
use client::OpenAiClient;
use logger::RunLog;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // ログはこのブロックの終わりで閉じる（exit前に必ずdrop）
    let exit_code = match RunLog::open(&cli.log) {
        Ok(mut log) => {
            log.log("Pokemon AI OCR Renamer is starting up...");
            if cli.dry_run {
                log.log("Dry run: files will not be renamed.");
            }

            match pipeline::run(&cli.run_options(), OpenAiClient::new, &mut log).await {
                Ok(summary) if cli.dry_run => {
                    log.log(format!(
                        "Folder processing complete! ({} would be renamed, {} skipped, {} total)",
                        summary.would_rename, summary.skipped, summary.processed
                    ));
                    0
                }
                Ok(summary) => {
                    log.log(format!(
                        "Folder processing complete! ({} renamed, {} skipped, {} total)",
                        summary.renamed, summary.skipped, summary.processed
                    ));
                    0
                }
                Err(e) => {
                    log.log(e.to_string());
                    1
                }
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };

    if !cli.no_pause {
        cli::pause_before_exit();
    }
    std::process::exit(exit_code);
}
