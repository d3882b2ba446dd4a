use super::*;
use workflow::HttpMethod;

#[test]
fn native_builds_never_reach_the_network() {
    let request = HttpRequest { method: HttpMethod::Get, url: "http://api.test/x/".to_owned(), bearer: None, body: None };
    let result = futures::executor::block_on(BrowserTransport.send(request));
    assert_eq!(result, Err(TransportError("GET http://api.test/x/ is only available in the browser".to_owned())));
}
