#![cfg(feature = "async-client")]

use oam_rreg::{
    Agent11gCreate, BaseRequest, Error, OrclSSOCreate, PolicyRequest, RregAsyncClient,
};
use tokio::time::{timeout, Duration};

mod common;
use common::{serve_once, xml_response};

#[tokio::test]
async fn register_agent_11g_round_trips_profile() {
    let body = concat!(
        "<OAM11GRegResponse>",
        "<agentName>myAgent</agentName>",
        "<accessClientPasswd>generated</accessClientPasswd>",
        "<state>valid</state>",
        "<tokenValidityPeriod>3600</tokenValidityPeriod>",
        "<secretKey>s3cr3t</secretKey>",
        "<primaryServerList>",
        "<server><serverHost>oam.example.com</serverHost><serverPort>5575</serverPort></server>",
        "</primaryServerList>",
        "<secondaryServerList/>",
        "</OAM11GRegResponse>",
    );
    let response = xml_response("200 OK", body);
    let (base_url, rx) = serve_once(response).await;

    let client = RregAsyncClient::builder(format!(
        "{}/oam/services/rest/11.1.2.0.0/rreg",
        base_url
    ))
    .expect("builder")
    .build()
    .expect("build");

    let mut request = Agent11gCreate::new(
        "OPEN",
        "http://oam.example.com:5575",
        "admin",
        "secret",
        "myAgent",
    );
    request.agent_base_url = Some("http://app.example.com:7777".to_string());
    request.auto_create_policy = Some(true);

    let registered = client.register_agent_11g(&request).await.expect("request");
    assert_eq!(registered.agent_name, "myAgent");
    assert_eq!(registered.access_client_passwd, "generated");
    assert_eq!(registered.state, "valid");
    assert_eq!(registered.token_validity_period, 3600);
    assert_eq!(registered.secret_key.as_deref(), Some("s3cr3t"));
    assert_eq!(registered.primary_server_list.server.len(), 1);

    let req = timeout(Duration::from_secs(1), rx)
        .await
        .expect("request timeout")
        .expect("request");
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/oam/services/rest/11.1.2.0.0/rreg/agent");
    assert_eq!(req.header_value("Content-Type"), Some("application/xml"));
    let sent = req.body_text();
    assert!(sent.contains("<OAM11GRegRequest>"));
    assert!(sent.contains(&format!("<type>{}</type>", BaseRequest::TYPE_AGENT11)));
    assert!(sent.contains("<agentBaseUrl>http://app.example.com:7777</agentBaseUrl>"));
    assert!(sent.contains("<autoCreatePolicy>true</autoCreatePolicy>"));
}

#[tokio::test]
async fn register_policy_targets_policy_endpoint() {
    let body = concat!(
        "<PolicyRegResponse>",
        "<hostIdentifier>payrollHost</hostIdentifier>",
        "<applicationDomainName>PayrollDomain</applicationDomainName>",
        "<state>valid</state>",
        "</PolicyRegResponse>",
    );
    let response = xml_response("200 OK", body);
    let (base_url, rx) = serve_once(response).await;

    let client = RregAsyncClient::builder(format!("{}/rreg", base_url))
        .expect("builder")
        .build()
        .expect("build");

    let request = PolicyRequest::new(
        "CREATE",
        "http://oam.example.com:5575",
        "admin",
        "secret",
        "payrollHost",
        "PayrollDomain",
    );
    let registered = client.register_policy(&request).await.expect("request");
    assert_eq!(registered.state, "valid");
    assert_eq!(
        registered.application_domain_name.as_deref(),
        Some("PayrollDomain")
    );

    let req = timeout(Duration::from_secs(1), rx)
        .await
        .expect("request timeout")
        .expect("request");
    assert_eq!(req.path, "/rreg/policy");
    let sent = req.body_text();
    assert!(sent.contains("<PolicyRegRequest>"));
    assert!(sent.contains("<hostIdentifier>payrollHost</hostIdentifier>"));
}

#[tokio::test]
async fn rejected_registration_surfaces_server_messages() {
    let body = concat!(
        "<OSSORegResponse>",
        "<state>failed</state>",
        "<errorMsgs><message>oracle home path not accessible</message></errorMsgs>",
        "</OSSORegResponse>",
    );
    let response = xml_response("400 Bad Request", body);
    let (base_url, _rx) = serve_once(response).await;

    let client = RregAsyncClient::builder(format!("{}/rreg", base_url))
        .expect("builder")
        .build()
        .expect("build");

    let mut request = OrclSSOCreate::new(
        "OPEN",
        "http://oam.example.com:5575",
        "admin",
        "secret",
        "ossoAgent",
    );
    request.oracle_home_path = Some("/does/not/exist".to_string());

    let err = match client.register_orclsso(&request).await {
        Ok(_) => panic!("expected error"),
        Err(err) => err,
    };
    match err {
        Error::Api(err) => {
            assert_eq!(err.status, 400);
            assert_eq!(err.state.as_deref(), Some("failed"));
            assert_eq!(err.messages, vec!["oracle home path not accessible"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn agent_report_uses_plain_envelope() {
    let body = concat!(
        "<OAMRegResponse>",
        "<agentName>myAgent</agentName>",
        "<state>valid</state>",
        "</OAMRegResponse>",
    );
    let response = xml_response("200 OK", body);
    let (base_url, rx) = serve_once(response).await;

    let client = RregAsyncClient::builder(format!("{}/rreg", base_url))
        .expect("builder")
        .build()
        .expect("build");

    let request = BaseRequest::with_type(
        BaseRequest::TYPE_AGENT11,
        "agentDetail",
        "http://oam.example.com:5575",
        "admin",
        "secret",
        "myAgent",
    );
    let report = client.agent_report(&request).await.expect("request");
    assert_eq!(report.agent_name, "myAgent");
    assert_eq!(report.state.as_deref(), Some("valid"));

    let req = timeout(Duration::from_secs(1), rx)
        .await
        .expect("request timeout")
        .expect("request");
    let sent = req.body_text();
    assert!(sent.contains("<OAMRegRequest>"));
    assert!(sent.contains("<mode>agentDetail</mode>"));
}
