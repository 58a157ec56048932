// Shared helpers for the integration tests

use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A Chrome-style offer with one audio, one video and one data section
pub const OFFER: &str = "v=0\r\n\
o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n\
s=-\r\n\
t=0 0\r\n\
a=group:BUNDLE 0 1 2\r\n\
a=ice-ufrag:EsAw\r\n\
a=ice-pwd:bP+XJMM09aR8AiX1jdukzR6Y\r\n\
a=fingerprint:sha-256 d7:3a:b5:9c:11:22:33:44\r\n\
m=audio 9 UDP/TLS/RTP/SAVPF 111 0\r\n\
c=IN IP4 0.0.0.0\r\n\
a=rtcp:9 IN IP4 0.0.0.0\r\n\
a=candidate:842163049 1 udp 1677729535 203.0.113.7 46154 typ srflx raddr 10.0.0.2 rport 46154 generation 0 ufrag EsAw network-cost 999\r\n\
a=mid:0\r\n\
a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r\n\
a=sendrecv\r\n\
a=msid:stream0 audio0\r\n\
a=rtcp-mux\r\n\
a=rtpmap:111 opus/48000/2\r\n\
a=rtcp-fb:111 transport-cc\r\n\
a=fmtp:111 minptime=10;useinbandfec=1\r\n\
a=rtpmap:0 PCMU/8000\r\n\
a=ssrc:3510681183 cname:loqPWNg7JMmrFUnr\r\n\
a=ssrc:3510681183 msid:stream0 audio0\r\n\
m=video 9 UDP/TLS/RTP/SAVPF 100 101 102\r\n\
c=IN IP4 0.0.0.0\r\n\
b=AS:1000\r\n\
a=mid:1\r\n\
a=ice-ufrag:Vid0\r\n\
a=ice-pwd:videopassword0123456789\r\n\
a=sendonly\r\n\
a=rtcp-mux\r\n\
a=rtcp-rsize\r\n\
a=rtpmap:100 VP8/90000\r\n\
a=rtcp-fb:100 nack\r\n\
a=rtpmap:101 RTX/90000\r\n\
a=fmtp:101 apt=100\r\n\
a=rtpmap:102 RED/90000\r\n\
a=ssrc-group:FID 1111 2222\r\n\
a=ssrc:1111 cname:loqPWNg7JMmrFUnr\r\n\
a=ssrc:2222 cname:loqPWNg7JMmrFUnr\r\n\
m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\n\
c=IN IP4 0.0.0.0\r\n\
a=mid:2\r\n\
a=sctp-port:5000\r\n\
a=max-message-size:262144\r\n";
