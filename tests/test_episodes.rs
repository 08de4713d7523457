use serde_json::json;
use tvdb_rs::episodes::EpisodeOptions;
use tvdb_rs::series::{EpisodesOptions, EpisodesQueryOptions};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod utils;

fn episode_body(id: u32, name: &str, season: u32, number: u32) -> serde_json::Value {
    json!({
        "id": id,
        "airedSeason": season,
        "airedEpisodeNumber": number,
        "episodeName": name,
        "firstAired": "2011-04-17",
        "seriesId": 121361,
        "lastUpdated": 1530000000
    })
}

#[tokio::test]
async fn series_episodes_return_one_page() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": {"first": 1, "last": 2, "next": 2, "prev": null},
            "data": [
                episode_body(3254641, "Winter Is Coming", 1, 1),
                episode_body(3436411, "The Kingsroad", 1, 2)
            ]
        })))
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let episodes = tvdb
        .series_episodes(121361, EpisodesOptions::default())
        .await?;
    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].episode_name.as_deref(), Some("Winter Is Coming"));
    Ok(())
}

#[tokio::test]
async fn requested_page_is_passed_through() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/episodes"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": {"first": 1, "last": 2, "next": null, "prev": 1},
            "data": [episode_body(4245778, "Valar Morghulis", 2, 10)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let episodes = tvdb
        .series_episodes(121361, EpisodesOptions::default().page(2))
        .await?;
    assert_eq!(episodes[0].aired_season, Some(2));

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn paged_full_response_exposes_the_links() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": {"first": 1, "last": 8, "next": 2, "prev": null},
            "data": [episode_body(3254641, "Winter Is Coming", 1, 1)]
        })))
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let full = tvdb
        .series_episodes_full(121361, EpisodesOptions::default())
        .await?;
    assert_eq!(full.body.links.next, Some(2));
    assert_eq!(full.body.links.last, Some(8));
    assert_eq!(full.body.links.prev, None);
    assert_eq!(full.body.data.len(), 1);
    Ok(())
}

#[tokio::test]
async fn episode_query_by_aired_season() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/episodes/query"))
        .and(query_param("airedSeason", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": {"first": 1, "last": 1, "next": null, "prev": null},
            "data": [episode_body(3254641, "Winter Is Coming", 1, 1)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let episodes = tvdb
        .series_episodes_query(121361, EpisodesQueryOptions::default().aired_season(1))
        .await?;
    assert_eq!(episodes.len(), 1);

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn episode_query_params() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/episodes/query/params"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"data": ["absoluteNumber", "airedSeason", "airedEpisode", "dvdSeason", "dvdEpisode", "imdbId", "page"]}),
        ))
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let params = tvdb
        .series_episodes_query_params(121361, Default::default())
        .await?;
    assert!(params.contains(&"airedSeason".to_string()));
    Ok(())
}

#[tokio::test]
async fn single_episode_by_id() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/episodes/3254641"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": episode_body(3254641, "Winter Is Coming", 1, 1)
        })))
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let episode = tvdb.episode(3254641, EpisodeOptions::default()).await?;
    assert_eq!(episode.id, 3254641);
    assert_eq!(episode.series_id, 121361);
    Ok(())
}
