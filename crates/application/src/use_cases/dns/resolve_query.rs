use dnslite_domain::{DnsConfig, DnsQuery, DomainError, RecordType, Transport};
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::NS;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{RecordRepository, UpstreamProxy};
use crate::records::{RecordTypeMapper, TypeRegistry};

/// What to send back for one query.
#[derive(Debug)]
pub enum Resolution {
    /// Built locally, authoritative.
    Answer(Message),
    /// Upstream reply, relayed byte for byte.
    Proxied(Vec<u8>),
}

impl Resolution {
    pub fn into_wire(self) -> Result<Vec<u8>, DomainError> {
        match self {
            Resolution::Answer(message) => serialize_message(&message),
            Resolution::Proxied(bytes) => Ok(bytes),
        }
    }
}

/// A parsed request with its single question.
#[derive(Debug)]
pub struct ClassifiedQuery {
    pub message: Message,
    /// Question name as received, used as the answer owner.
    pub owner: Name,
    pub query: DnsQuery,
}

pub struct ResolveQueryUseCase {
    repo: Arc<dyn RecordRepository>,
    registry: Arc<TypeRegistry>,
    upstream: Arc<dyn UpstreamProxy>,
    nameservers: Vec<Name>,
    delegation_ttl: u32,
}

impl ResolveQueryUseCase {
    pub fn new(
        repo: Arc<dyn RecordRepository>,
        registry: Arc<TypeRegistry>,
        upstream: Arc<dyn UpstreamProxy>,
        config: &DnsConfig,
    ) -> Result<Self, DomainError> {
        let nameservers = config
            .nameservers
            .iter()
            .map(|ns| {
                Name::from_ascii(ns).map_err(|e| {
                    DomainError::InvalidRequest(format!("Invalid nameserver '{}': {}", ns, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            repo,
            registry,
            upstream,
            nameservers,
            delegation_ttl: config.delegation_ttl,
        })
    }

    /// Resolves one raw query. An `Err` means the query gets no reply.
    #[instrument(skip(self, raw), fields(len = raw.len()))]
    pub async fn execute(
        &self,
        raw: &[u8],
        transport: Transport,
    ) -> Result<Resolution, DomainError> {
        let classified = Self::classify(raw, transport)?;
        let query = &classified.query;

        if query.record_type == RecordType::NS {
            debug!(name = %query.name, "Answering with delegation");
            let answers = self.delegation(&classified.owner);
            return Self::answer(&classified.message, answers, transport);
        }

        let records = self.repo.find(&query.name, query.record_type).await?;

        if records.is_empty() {
            debug!(
                name = %query.name,
                record_type = %query.record_type,
                "No local records, proxying upstream"
            );
            let reply = self.upstream.forward(raw, transport).await?;
            return Ok(Resolution::Proxied(reply));
        }

        let answers = self.registry.render(&classified.owner, &records);
        debug!(
            name = %query.name,
            record_type = %query.record_type,
            answers = answers.len(),
            "Answering from local records"
        );
        Self::answer(&classified.message, answers, transport)
    }

    /// Parses `raw` and requires a standard query with exactly one supported question.
    pub fn classify(raw: &[u8], transport: Transport) -> Result<ClassifiedQuery, DomainError> {
        let message = Message::from_vec(raw)
            .map_err(|e| DomainError::MalformedQuery(format!("Failed to parse: {}", e)))?;

        if message.message_type() != MessageType::Query {
            return Err(DomainError::MalformedQuery("QR bit set".to_string()));
        }
        if message.op_code() != OpCode::Query {
            return Err(DomainError::MalformedQuery(format!(
                "Unsupported opcode {:?}",
                message.op_code()
            )));
        }
        if message.queries().len() != 1 {
            return Err(DomainError::MalformedQuery(format!(
                "Expected one question, got {}",
                message.queries().len()
            )));
        }

        let question = &message.queries()[0];
        let record_type = RecordTypeMapper::from_hickory(question.query_type()).ok_or_else(|| {
            DomainError::UnsupportedQueryType(question.query_type().to_string())
        })?;
        let owner = question.name().clone();
        let query = DnsQuery::new(&owner.to_ascii(), record_type, transport);

        Ok(ClassifiedQuery {
            message,
            owner,
            query,
        })
    }

    fn delegation(&self, owner: &Name) -> Vec<Record> {
        self.nameservers
            .iter()
            .map(|ns| {
                Record::from_rdata(
                    owner.clone(),
                    self.delegation_ttl,
                    RData::NS(NS(ns.clone())),
                )
            })
            .collect()
    }

    fn answer(
        request: &Message,
        answers: Vec<Record>,
        transport: Transport,
    ) -> Result<Resolution, DomainError> {
        let reply = Self::reply(request, answers);
        let reply = match transport {
            Transport::Udp => Self::fit_udp(reply, request.max_payload())?,
            Transport::Tcp => reply,
        };
        Ok(Resolution::Answer(reply))
    }

    /// A UDP reply larger than the client's payload limit (512 without EDNS)
    /// goes out with TC set and no answers so the client retries over TCP.
    fn fit_udp(mut reply: Message, max_payload: u16) -> Result<Message, DomainError> {
        let len = serialize_message(&reply)?.len();
        if len <= usize::from(max_payload) {
            return Ok(reply);
        }
        debug!(len, max_payload, "Reply exceeds UDP payload limit, truncating");
        reply.take_answers();
        reply.set_truncated(true);
        Ok(reply)
    }

    fn reply(request: &Message, answers: Vec<Record>) -> Message {
        let mut reply = Message::new(request.id(), MessageType::Response, request.op_code());
        reply.set_authoritative(true);
        reply.set_recursion_desired(request.recursion_desired());
        for query in request.queries() {
            reply.add_query(query.clone());
        }
        reply.add_answers(answers);
        reply
    }
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}
