#![forbid(unsafe_code)]

mod build_url;
mod client_defaults;
mod error;
mod models;
mod rreg;
#[cfg(feature = "async-client")]
mod rreg_async;
mod xml;

pub use error::{Error, RegistrationError};

pub use models::{
    Agent10gCreate, Agent10gResponse, Agent10gUpdate, Agent11gCreate, Agent11gResponse,
    Agent11gUpdate, AttrMappingValue, AttributeCondition, AttributeMapping, BaseRequest,
    BaseResponse, CombinerMode, Condition, ConditionCombiner, ConditionNameList, ConditionsList,
    DayOfWeek, DeletedUriList, ErrorMsgs, ExcludedResourcesList, HostPortVariations,
    HostPortVariationsList, Identity, Ip4Range, Ip4RangeList, IpValidationExceptions, ListValue,
    LogInUrls, LogOutUrls, MiscellaneousProperties, MiscellaneousProperty, NotEnforcedUrls,
    OpenSSOCreate, OpenSSOResponse, OpenSSOUpdate, OrclSSOCreate, OrclSSOResponse, OrclSSOUpdate,
    PolicyRequest, PolicyResponse, PrimaryServerList, ProfileAttributeMapping, Property,
    ProtectedResourcesList, PublicResourcesList, ResponseAttributeMapping, ResponseProperties,
    RregApplicationDomain, RregAuthenticationPolicies, RregAuthenticationPolicy,
    RregAuthorizationPolicies, RregAuthorizationPolicy, Rule, Rules, SecondaryServerList, Server,
    SessionAttributeMapping, SuccessResponse, SuccessResponseList, Temporal, UriList, UriResource,
    UserDefinedParam, UserDefinedParameters,
};

pub use rreg::{RregClient, RregClientBuilder};
#[cfg(feature = "async-client")]
pub use rreg_async::{RregAsyncClient, RregAsyncClientBuilder};
pub use xml::Message;
