// Line-oriented session ID issuer

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{log::Logger, log_debug, log_error, log_info, log_trace};

use super::{SessionIdGenerator, SessionIssuerConfiguration};

/// Issues session IDs, logging them if configured
pub struct SessionIssuer {
    /// Logger
    logger: Arc<Logger>,

    /// Configuration
    config: SessionIssuerConfiguration,

    /// Session ID generator
    generator: Arc<dyn SessionIdGenerator>,
}

impl SessionIssuer {
    /// Creates new SessionIssuer
    pub fn new(
        logger: Arc<Logger>,
        config: SessionIssuerConfiguration,
        generator: Arc<dyn SessionIdGenerator>,
    ) -> SessionIssuer {
        SessionIssuer {
            logger,
            config,
            generator,
        }
    }

    /// Issues a session ID for an account
    pub fn issue(&self, account_name: &str) -> String {
        let session_id = self.generator.generate_session_id(account_name);

        if self.config.log_requests {
            log_info!(
                self.logger,
                "Issued session ID {} for account '{}'",
                session_id,
                account_name
            );
        }

        session_id
    }
}

/// Runs the issuer over a line stream
///
/// Every input line is an account name (empty lines included).
/// For every line, one session ID is written, followed by a line break.
///
/// # Arguments
///
/// * `issuer` - The session issuer
/// * `input` - Stream of account names
/// * `output` - Stream to write the session IDs into
///
/// # Return value
///
/// Returns the number of issued session IDs once the input ends
pub async fn run_issuer<R, W>(
    issuer: &SessionIssuer,
    input: R,
    mut output: W,
) -> Result<u64, std::io::Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let logger = &issuer.logger;
    let mut lines = input.lines();
    let mut issued: u64 = 0;

    loop {
        let line = match lines.next_line().await {
            Ok(Some(l)) => l,
            Ok(None) => {
                log_debug!(logger, "End of input");
                break;
            }
            Err(e) => {
                log_error!(logger, "Could not read account name: {}", e);
                return Err(e);
            }
        };

        log_trace!(logger, "Account name received: {:?}", line);

        let session_id = issuer.issue(&line);

        if let Err(e) = output.write_all(format!("{}\n", session_id).as_bytes()).await {
            log_error!(logger, "Could not write session ID: {}", e);
            return Err(e);
        }

        issued += 1;
    }

    output.flush().await?;

    Ok(issued)
}

// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CounterSessionIdGenerator;

    fn make_issuer() -> SessionIssuer {
        SessionIssuer::new(
            Arc::new(Logger::new_disabled()),
            SessionIssuerConfiguration { log_requests: true },
            Arc::new(CounterSessionIdGenerator::new()),
        )
    }

    #[test]
    fn test_issue() {
        let issuer = make_issuer();

        assert_eq!(issuer.issue("alice"), "sessionId_0_alice");
        assert_eq!(issuer.issue("bob"), "sessionId_1_bob");
        assert_eq!(issuer.issue("alice"), "sessionId_2_alice");
    }

    #[tokio::test]
    async fn test_run_issuer() {
        let issuer = make_issuer();
        let input: &[u8] = b"alice\nbob\r\n\nalice";
        let mut output: Vec<u8> = Vec::new();

        let issued = run_issuer(&issuer, input, &mut output).await.unwrap();

        assert_eq!(issued, 4);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "sessionId_0_alice\nsessionId_1_bob\nsessionId_2_\nsessionId_3_alice\n"
        );
    }

    #[tokio::test]
    async fn test_run_issuer_keeps_carriage_return() {
        let issuer = make_issuer();
        let input: &[u8] = b"bob\r\r\nalice\n";
        let mut output: Vec<u8> = Vec::new();

        let issued = run_issuer(&issuer, input, &mut output).await.unwrap();

        assert_eq!(issued, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "sessionId_0_bob\r\nsessionId_1_alice\n"
        );
    }

    #[tokio::test]
    async fn test_run_issuer_empty_input() {
        let issuer = make_issuer();
        let input: &[u8] = b"";
        let mut output: Vec<u8> = Vec::new();

        let issued = run_issuer(&issuer, input, &mut output).await.unwrap();

        assert_eq!(issued, 0);
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_run_issuer_invalid_utf8() {
        let issuer = make_issuer();
        let input: &[u8] = b"alice\n\xff\xfe\n";
        let mut output: Vec<u8> = Vec::new();

        let res = run_issuer(&issuer, input, &mut output).await;

        assert!(res.is_err());
        assert_eq!(String::from_utf8(output).unwrap(), "sessionId_0_alice\n");
    }
}
