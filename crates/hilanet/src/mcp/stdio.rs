use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub async fn run_stdio(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting MCP server with stdio transport...");
        eprintln!();
    }
    log::info!("hilanet MCP server started (stdio)");

    let reader = BufReader::new(tokio::io::stdin());
    serve(reader, tokio::io::stdout(), &global).await
}

/// Answer line-delimited JSON-RPC messages until `reader` hits EOF.
async fn serve<R, W>(mut reader: R, mut writer: W, global: &crate::Global) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let bytes_read = reader.read_until(b'\n', &mut buf).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                if global.verbose {
                    eprintln!("Received: {trimmed}");
                }

                let Some(response) = super::handle_request(trimmed, global) else {
                    continue;
                };
                response
            }
            Err(e) => {
                log::warn!("dropping line that is not valid UTF-8: {e}");
                super::parse_error(format!("invalid UTF-8: {e}"))
            }
        };
        let response_json = serde_json::to_string(&response)?;

        if global.verbose {
            eprintln!("Sending: {response_json}");
        }

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
