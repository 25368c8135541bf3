mod agent10g;
mod agent11g;
mod common;
mod envelope;
mod opensso;
mod orclsso;
mod policy;

pub use agent10g::{Agent10gCreate, Agent10gResponse, Agent10gUpdate};
pub use agent11g::{Agent11gCreate, Agent11gResponse, Agent11gUpdate};
pub use common::{
    DeletedUriList, ErrorMsgs, ExcludedResourcesList, HostPortVariations, HostPortVariationsList,
    IpValidationExceptions, LogInUrls, LogOutUrls, NotEnforcedUrls, PrimaryServerList,
    ProtectedResourcesList, PublicResourcesList, SecondaryServerList, Server, UriList, UriResource,
    UserDefinedParam, UserDefinedParameters,
};
pub use envelope::{BaseRequest, BaseResponse};
pub use opensso::{
    AttrMappingValue, AttributeMapping, ListValue, MiscellaneousProperties, MiscellaneousProperty,
    OpenSSOCreate, OpenSSOResponse, OpenSSOUpdate, ProfileAttributeMapping, Property,
    ResponseAttributeMapping, ResponseProperties, SessionAttributeMapping,
};
pub use orclsso::{OrclSSOCreate, OrclSSOResponse, OrclSSOUpdate};
pub use policy::{
    AttributeCondition, CombinerMode, Condition, ConditionCombiner, ConditionNameList,
    ConditionsList, DayOfWeek, Identity, Ip4Range, Ip4RangeList, PolicyRequest, PolicyResponse,
    RregApplicationDomain, RregAuthenticationPolicies, RregAuthenticationPolicy,
    RregAuthorizationPolicies, RregAuthorizationPolicy, Rule, Rules, SuccessResponse,
    SuccessResponseList, Temporal,
};
