#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum MockAnswer {
    A(Ipv4Addr),
    Ns(&'static str),
    Txt(&'static str),
    Opaque(u16, Vec<u8>),
}

/// How the mock server answers every query it receives.
#[derive(Debug, Clone, Default)]
pub struct MockBehavior {
    pub rcode: u8,
    pub answers: Vec<MockAnswer>,
    /// UDP replies carry TC and no answers; TCP replies are complete.
    pub truncate_udp: bool,
    pub wrong_id: bool,
}

impl MockBehavior {
    pub fn answering(answers: Vec<MockAnswer>) -> Self {
        Self {
            answers,
            ..Self::default()
        }
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Self::default()
        }
    }
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Listens on an ephemeral UDP port and the same TCP port on 127.0.0.1.
    pub async fn start(behavior: MockBehavior) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let listener = TcpListener::bind(local_addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = build_mock_response(&buf[..len], &behavior, true);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = build_mock_response(&query, &behavior, false);
                                let len = (response.len() as u16).to_be_bytes();
                                let _ = stream.write_all(&len).await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn question_end(query: &[u8]) -> Option<usize> {
    let mut pos = 12;
    while pos < query.len() {
        let len = query[pos] as usize;
        if len == 0 {
            return Some(pos + 1 + 4).filter(|end| *end <= query.len());
        }
        pos += len + 1;
    }
    None
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn build_mock_response(query: &[u8], behavior: &MockBehavior, udp: bool) -> Vec<u8> {
    let Some(qend) = question_end(query) else {
        return vec![];
    };

    let truncated = udp && behavior.truncate_udp;
    let answers: &[MockAnswer] = if truncated { &[] } else { &behavior.answers };

    let mut response = Vec::with_capacity(512);

    if behavior.wrong_id {
        let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
        response.extend_from_slice(&id.to_be_bytes());
    } else {
        response.extend_from_slice(&query[0..2]);
    }

    // QR, AA, RD (+TC)
    response.push(if truncated { 0x87 } else { 0x85 });
    // RA + rcode
    response.push(0x80 | (behavior.rcode & 0x0f));

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(&query[12..qend]);

    for answer in answers {
        let (rtype, rdata): (u16, Vec<u8>) = match answer {
            MockAnswer::A(ip) => (1, ip.octets().to_vec()),
            MockAnswer::Ns(name) => (2, encode_name(name)),
            MockAnswer::Txt(text) => {
                let mut rdata = vec![text.len() as u8];
                rdata.extend_from_slice(text.as_bytes());
                (16, rdata)
            }
            MockAnswer::Opaque(code, rdata) => (*code, rdata.clone()),
        };

        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(&rdata);
    }

    response
}
