use async_trait::async_trait;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use zonemap::{
    BoundPropertySource, DataverseSource, HostContainer, HostContext, LatLng, LayerKind,
    RefitPolicy, ZoneLayer, ZoneMapControl, ZoneRecord, ZoneSource,
};

const TRIANGLE: &str =
    r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[4.0,0.0],[4.0,3.0],[0.0,0.0]]]}"#;
const SQUARE: &str =
    r#"{"type":"Polygon","coordinates":[[[10.0,10.0],[12.0,10.0],[12.0,12.0],[10.0,10.0]]]}"#;

/// Source handing back a fixed record list, for driving the control
/// without any I/O.
struct StaticSource {
    records: Vec<ZoneRecord>,
    refit: RefitPolicy,
}

#[async_trait]
impl ZoneSource for StaticSource {
    async fn fetch_zones(&self, _ctx: &HostContext) -> Vec<ZoneRecord> {
        self.records.clone()
    }

    fn refit_policy(&self) -> RefitPolicy {
        self.refit
    }
}

/// Serves exactly one HTTP response on a random local port, then closes.
fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head before answering
            let mut buf = [0u8; 4096];
            let mut read = 0;
            while read < buf.len() {
                match stream.read(&mut buf[read..]) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        read += n;
                        if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{addr}")
}

fn ready_control(source: Box<dyn ZoneSource>) -> (ZoneMapControl, HostContainer) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut control = ZoneMapControl::new(source);
    let mut container = HostContainer::new(1024);
    control.init(&HostContext::new(), &mut container);
    (control, container)
}

#[tokio::test]
async fn zone_layer_count_matches_parsed_records() {
    let source = StaticSource {
        records: vec![
            ZoneRecord::new(TRIANGLE),
            ZoneRecord::new("{not geojson"),
            ZoneRecord::new(SQUARE).with_color("#123456"),
        ],
        refit: RefitPolicy::None,
    };
    let (mut control, _container) = ready_control(Box::new(source));

    control.update_view(&HostContext::new()).await;

    let map = control.map().unwrap();
    // The malformed record is excluded, not counted as a failure
    assert_eq!(map.count_by_kind(LayerKind::Zone), 2);
    assert_eq!(map.count_by_kind(LayerKind::Tile), 1);
}

#[tokio::test]
async fn second_update_replaces_first_layer_set() {
    let collection_a = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,1.0]},"properties":null},
            {"type":"Feature","geometry":{"type":"Point","coordinates":[2.0,2.0]},"properties":null},
            {"type":"Feature","geometry":{"type":"Point","coordinates":[3.0,3.0]},"properties":null}
        ]
    }
    "#;
    let collection_b = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {"type":"Feature","geometry":{"type":"Point","coordinates":[9.0,9.0]},"properties":null}
        ]
    }
    "#;

    let (mut control, _container) = ready_control(Box::new(BoundPropertySource::new()));

    let mut ctx = HostContext::new().with_parameter("geoJsonData", collection_a);
    control.update_view(&ctx).await;
    assert_eq!(control.map().unwrap().count_by_kind(LayerKind::Zone), 3);

    ctx.set_parameter("geoJsonData", collection_b);
    control.update_view(&ctx).await;

    let map = control.map().unwrap();
    assert_eq!(map.count_by_kind(LayerKind::Zone), 1);
    // Nothing from the first refresh survives
    assert!(map.get_layer("zone-1").is_none());
    assert!(map.get_layer("zone-2").is_none());
    assert_eq!(map.layer_count(), 2);
}

#[tokio::test]
async fn http_500_renders_zero_zones_without_error() {
    let base_url = serve_once("500 Internal Server Error", String::new());
    let (mut control, _container) = ready_control(Box::new(DataverseSource::new("crb23_table11")));

    let ctx = HostContext::new().with_client_url(base_url);
    control.update_view(&ctx).await;

    let map = control.map().unwrap();
    assert_eq!(map.count_by_kind(LayerKind::Zone), 0);
    assert_eq!(map.count_by_kind(LayerKind::Tile), 1);
}

#[tokio::test]
async fn fetched_records_render_and_refit_the_view() {
    let body = serde_json::json!({
        "value": [
            { "GeoJSON": TRIANGLE, "zoneColor": "#00ff00" },
            { "GeoJSON": SQUARE }
        ]
    })
    .to_string();
    let base_url = serve_once("200 OK", body);

    let (mut control, _container) = ready_control(Box::new(DataverseSource::new("crb23_table11")));
    let ctx = HostContext::new().with_client_url(base_url);
    control.update_view(&ctx).await;

    let map = control.map().unwrap();
    assert_eq!(map.count_by_kind(LayerKind::Zone), 2);

    let zone = map
        .get_layer("zone-0")
        .and_then(|l| l.as_any().downcast_ref::<ZoneLayer>())
        .unwrap();
    assert_eq!(zone.style().color, "#00ff00");

    // The view was refit to the first zone's bounds
    assert_eq!(map.center(), LatLng::new(1.5, 2.0));
    assert!(map.zoom() > 2.0);
}

#[tokio::test]
async fn bound_property_styles_layer_and_keeps_the_view() {
    let collection = r##"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]},
                "properties": {"color": "#ff0000"}
            }
        ]
    }
    "##;

    let (mut control, _container) = ready_control(Box::new(BoundPropertySource::new()));
    let ctx = HostContext::new().with_parameter("geoJsonData", collection);
    control.update_view(&ctx).await;

    let map = control.map().unwrap();
    assert_eq!(map.count_by_kind(LayerKind::Zone), 1);

    let zone = map
        .get_layer("zone-0")
        .and_then(|l| l.as_any().downcast_ref::<ZoneLayer>())
        .unwrap();
    assert_eq!(zone.style().color, "#ff0000");

    // Bound-property refreshes do not refit the view
    assert_eq!(map.center(), LatLng::new(0.0, 0.0));
    assert_eq!(map.zoom(), 2.0);
}

#[tokio::test]
async fn failed_refresh_still_clears_stale_zones() {
    let (mut control, _container) = ready_control(Box::new(BoundPropertySource::new()));

    let mut ctx = HostContext::new().with_parameter(
        "geoJsonData",
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,1.0]},"properties":null}"#,
    );
    control.update_view(&ctx).await;
    assert_eq!(control.map().unwrap().count_by_kind(LayerKind::Zone), 1);

    // A refresh against malformed data renders as zero zones, not as the
    // previous set
    ctx.set_parameter("geoJsonData", "{broken");
    control.update_view(&ctx).await;
    assert_eq!(control.map().unwrap().count_by_kind(LayerKind::Zone), 0);
}

#[tokio::test]
async fn destroy_after_update_releases_everything() {
    let source = StaticSource {
        records: vec![ZoneRecord::new(TRIANGLE)],
        refit: RefitPolicy::FirstZone,
    };
    let (mut control, _container) = ready_control(Box::new(source));

    control.update_view(&HostContext::new()).await;
    assert!(control.map().is_some());

    control.destroy();
    assert!(control.map().is_none());
}
