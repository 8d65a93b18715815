use dnslite_domain::Transport;
use dnslite_infrastructure::dns::transport::{read_with_length_prefix, send_with_length_prefix};
use dnslite_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

const MAX_UDP_QUERY_SIZE: usize = 4096;
const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Serves UDP and TCP on the same address until either listener fails.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let domain = if bind_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let udp_socket = Arc::new(create_udp_socket(domain, bind_addr)?);
    let tcp_listener = create_tcp_listener(domain, bind_addr)?;

    info!(bind_address = %bind_addr, "DNS server listening on UDP and TCP");

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    let handler_udp = handler.clone();
    join_set.spawn(async move {
        run_udp_loop(udp_socket, handler_udp).await;
    });
    join_set.spawn(async move {
        run_tcp_loop(tcp_listener, handler).await;
    });

    join_set.join_next().await;
    Ok(())
}

async fn run_udp_loop(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; MAX_UDP_QUERY_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(r) => r,
            Err(e) => {
                // ICMP port-unreachable from a previous reply surfaces here on some platforms.
                warn!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            if let Some(response) = handler.handle(&query, Transport::Udp, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "UDP send failed");
                }
            }
        });
    }
}

async fn run_tcp_loop(listener: TcpListener, handler: Arc<DnsServerHandler>) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                error!(error = %e, "TCP accept error");
                continue;
            }
        };

        let handler = handler.clone();
        tokio::spawn(async move {
            serve_tcp_connection(stream, peer, handler).await;
        });
    }
}

/// Answers length-prefixed queries until the client closes, idles out or sends garbage.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<DnsServerHandler>,
) {
    loop {
        let next = tokio::time::timeout(TCP_IDLE_TIMEOUT, read_with_length_prefix(&mut stream));
        let query = match next.await {
            Ok(Ok(query)) => query,
            Ok(Err(e)) => {
                debug!(client = %peer, error = %e, "TCP connection closed");
                return;
            }
            Err(_) => {
                debug!(client = %peer, "TCP connection idle, closing");
                return;
            }
        };

        let Some(response) = handler.handle(&query, Transport::Tcp, peer).await else {
            continue;
        };
        if let Err(e) = send_with_length_prefix(&mut stream, &response).await {
            debug!(client = %peer, error = %e, "TCP send failed");
            return;
        }
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
