use super::*;

/// Tests walking every page of a 25-row listing with a limit of 10.
///
/// Expected: pages of 10, 10 and 5 rows in id order, each reporting 3 pages and a
/// total of 25
#[tokio::test]
async fn walks_pages_of_twenty_five_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    let mut created = Vec::new();
    for _ in 0..25 {
        created.push(json!(factory::create_voiture(db, societe.id).await?.id));
    }

    let mut seen = Vec::new();
    for (page, expected_len) in [("1", 10), ("2", 10), ("3", 5)] {
        let result = list(db, "voitures", &[("page", page), ("limit", "10")])
            .await
            .unwrap();

        assert_eq!(result.rows.len(), expected_len, "page {}", page);
        assert_eq!(result.total, 25);
        assert_eq!(result.page_count, 3);
        assert_eq!(result.page_size, Some(10));
        seen.extend(ids(&result));
    }

    assert_eq!(seen, created);

    Ok(())
}

/// Tests a page past the last one.
///
/// Expected: no rows, serialized as the empty envelope
#[tokio::test]
async fn page_past_end_is_empty_envelope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    factory::create_voiture(db, societe.id).await?;

    let result = list(db, "voitures", &[("page", "2"), ("limit", "10")])
        .await
        .unwrap();

    assert!(result.rows.is_empty());
    assert_eq!(serde_json::to_value(result.into_dto()).unwrap(), json!({}));

    Ok(())
}

/// Tests a listing without page or limit.
///
/// Expected: every row, total equal to the row count, one page, no paginator
#[tokio::test]
async fn unpaginated_listing_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    for _ in 0..30 {
        factory::create_voiture(db, societe.id).await?;
    }

    let result = list(db, "voitures", &[]).await.unwrap();

    assert_eq!(result.rows.len(), 30);
    assert_eq!(result.total, 30);
    assert_eq!(result.page_count, 1);
    assert_eq!(result.page_size, None);

    let body = serde_json::to_value(result.into_dto()).unwrap();
    assert!(body.get("paginator").is_none());

    Ok(())
}

/// Tests that only `page` falls back to the configured page size.
///
/// Expected: 20 rows on the first page of 30
#[tokio::test]
async fn page_alone_uses_default_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    for _ in 0..30 {
        factory::create_voiture(db, societe.id).await?;
    }

    let result = list(db, "voitures", &[("page", "1")]).await.unwrap();

    assert_eq!(result.rows.len(), 20);
    assert_eq!(result.total, 30);
    assert_eq!(result.page_count, 2);

    Ok(())
}

/// Tests sorting combined with pagination.
///
/// Expected: the highest mileage first
#[tokio::test]
async fn sorts_before_paginating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    for km in [5_000, 120_000, 60_000] {
        factory::voiture::VoitureFactory::new(db, societe.id)
            .kilometrage(km)
            .build()
            .await?;
    }

    let result = list(
        db,
        "voitures",
        &[("orderBy", "kilometrage DESC"), ("limit", "2")],
    )
    .await
    .unwrap();

    let km: Vec<_> = result.rows.iter().map(|row| row["kilometrage"].clone()).collect();
    assert_eq!(km, vec![json!(120_000), json!(60_000)]);
    assert_eq!(result.total, 3);

    Ok(())
}

/// Tests the largest window the database can bind.
///
/// Expected: a limit of `i64::MAX` returns every row, and the last addressable page
/// returns the empty envelope
#[tokio::test]
async fn largest_window_executes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_domain_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let societe = factory::create_societe(db).await?;
    factory::create_voiture(db, societe.id).await?;
    factory::create_voiture(db, societe.id).await?;

    let max = i64::MAX.to_string();

    let everything = list(db, "voitures", &[("page", "1"), ("limit", &max)])
        .await
        .unwrap();
    assert_eq!(everything.rows.len(), 2);
    assert_eq!(everything.page_count, 1);

    let last_page = list(db, "voitures", &[("page", &max), ("limit", "1")])
        .await
        .unwrap();
    assert!(last_page.rows.is_empty());

    Ok(())
}

/// Tests windows that cannot be bound as signed 64-bit values.
///
/// Expected: `InvalidPagination` before any query runs
#[test]
fn unbindable_window_is_rejected() {
    let too_large = u64::MAX.to_string();

    for pairs in [
        [("page", "1"), ("limit", too_large.as_str())],
        [("page", too_large.as_str()), ("limit", "10")],
    ] {
        let query: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let result = ListParams::from_query(query, QueryConfig::default().default_page_size);

        assert!(
            matches!(result, Err(QueryError::InvalidPagination(_))),
            "pairs {:?}",
            pairs
        );
    }
}
