use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// `data` of the `PARTNER_FOUND` sent to the side that creates the SDP offer.
pub const GO_FIRST: &str = "GO_FIRST";

/// Every message name that can appear on the signaling socket.
///
/// [`MessageName::as_str`] is the only place the wire spelling lives; serde goes
/// through it in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum MessageName {
    PairingStart,
    PairingAbort,
    PairingDone,
    SdpOffer,
    SdpAnswer,
    SdpIceCandidate,
    PartnerFound,
    PartnerLeft,
}

impl MessageName {
    pub const ALL: [MessageName; 8] = [
        MessageName::PairingStart,
        MessageName::PairingAbort,
        MessageName::PairingDone,
        MessageName::SdpOffer,
        MessageName::SdpAnswer,
        MessageName::SdpIceCandidate,
        MessageName::PartnerFound,
        MessageName::PartnerLeft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageName::PairingStart => "PAIRING_START",
            MessageName::PairingAbort => "PAIRING_ABORT",
            MessageName::PairingDone => "PAIRING_DONE",
            MessageName::SdpOffer => "SDP_OFFER",
            MessageName::SdpAnswer => "SDP_ANSWER",
            MessageName::SdpIceCandidate => "SDP_ICE_CANDIDATE",
            MessageName::PartnerFound => "PARTNER_FOUND",
            MessageName::PartnerLeft => "PARTNER_LEFT",
        }
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MessageName> for &'static str {
    fn from(name: MessageName) -> Self {
        name.as_str()
    }
}

impl FromStr for MessageName {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownName(s.to_owned()))
    }
}

impl TryFrom<String> for MessageName {
    type Error = ProtocolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Flat JSON shape of a frame: `{"name": "...", "data": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub name: MessageName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// A signaling message, carrying only the fields its name uses.
///
/// SDP and ICE payloads are opaque strings; the server never looks inside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireMessage", into = "WireMessage")]
pub enum SignalMessage {
    PairingStart,
    PairingAbort,
    PairingDone,
    SdpOffer { sdp: String },
    SdpAnswer { sdp: String },
    IceCandidate { candidate: String },
    PartnerFound { go_first: bool },
    PartnerLeft,
}

impl SignalMessage {
    pub fn name(&self) -> MessageName {
        match self {
            SignalMessage::PairingStart => MessageName::PairingStart,
            SignalMessage::PairingAbort => MessageName::PairingAbort,
            SignalMessage::PairingDone => MessageName::PairingDone,
            SignalMessage::SdpOffer { .. } => MessageName::SdpOffer,
            SignalMessage::SdpAnswer { .. } => MessageName::SdpAnswer,
            SignalMessage::IceCandidate { .. } => MessageName::SdpIceCandidate,
            SignalMessage::PartnerFound { .. } => MessageName::PartnerFound,
            SignalMessage::PartnerLeft => MessageName::PartnerLeft,
        }
    }

    /// Messages forwarded verbatim between the two members of a pair.
    pub fn is_relay(&self) -> bool {
        matches!(
            self,
            SignalMessage::SdpOffer { .. }
                | SignalMessage::SdpAnswer { .. }
                | SignalMessage::IceCandidate { .. }
        )
    }

    /// Messages only the server may send.
    pub fn is_server_only(&self) -> bool {
        matches!(
            self,
            SignalMessage::PartnerFound { .. } | SignalMessage::PartnerLeft
        )
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for SignalMessage {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wire: WireMessage = serde_json::from_str(s)?;
        SignalMessage::try_from(wire)
    }
}

impl TryFrom<WireMessage> for SignalMessage {
    type Error = ProtocolError;

    fn try_from(wire: WireMessage) -> Result<Self, Self::Error> {
        let WireMessage { name, data } = wire;
        let payload = |data: Option<String>| data.ok_or(ProtocolError::MissingData(name));

        Ok(match name {
            MessageName::PairingStart => SignalMessage::PairingStart,
            MessageName::PairingAbort => SignalMessage::PairingAbort,
            MessageName::PairingDone => SignalMessage::PairingDone,
            MessageName::SdpOffer => SignalMessage::SdpOffer { sdp: payload(data)? },
            MessageName::SdpAnswer => SignalMessage::SdpAnswer { sdp: payload(data)? },
            MessageName::SdpIceCandidate => SignalMessage::IceCandidate {
                candidate: payload(data)?,
            },
            MessageName::PartnerFound => SignalMessage::PartnerFound {
                go_first: data.as_deref() == Some(GO_FIRST),
            },
            MessageName::PartnerLeft => SignalMessage::PartnerLeft,
        })
    }
}

impl From<SignalMessage> for WireMessage {
    fn from(message: SignalMessage) -> Self {
        let name = message.name();
        let data = match message {
            SignalMessage::SdpOffer { sdp } | SignalMessage::SdpAnswer { sdp } => Some(sdp),
            SignalMessage::IceCandidate { candidate } => Some(candidate),
            SignalMessage::PartnerFound { go_first: true } => Some(GO_FIRST.to_owned()),
            _ => None,
        };
        WireMessage { name, data }
    }
}
