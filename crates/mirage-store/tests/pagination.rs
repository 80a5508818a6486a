use mirage_model::{Record, RecordQuery, RecordSort, SortOrder};
use mirage_store::DemoData;
use proptest::prelude::*;

fn sort_strategy() -> impl Strategy<Value = RecordSort> {
    prop_oneof![
        Just(RecordSort::CreatedAt),
        Just(RecordSort::UpdatedAt),
        Just(RecordSort::Model),
        Just(RecordSort::Dimensions),
    ]
}

fn order_strategy() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn concatenated_pages_reproduce_the_full_listing(
        page_size in 1usize..40,
        sort in sort_strategy(),
        order in order_strategy(),
    ) {
        let records = DemoData::with_defaults().records();

        let full = records.list(&RecordQuery {
            sort,
            order,
            page: 1,
            page_size: 10_000,
            ..RecordQuery::default()
        });

        let mut gathered: Vec<Record> = Vec::new();
        let mut total_pages_seen = None;
        let mut page = 1;
        loop {
            let result = records.list(&RecordQuery {
                sort,
                order,
                page,
                page_size,
                ..RecordQuery::default()
            });

            prop_assert!(result.records.len() <= page_size);
            prop_assert_eq!(result.total_count, full.total_count);
            prop_assert_eq!(
                result.total_pages,
                full.total_count.div_ceil(page_size).max(1)
            );

            if let Some(expected) = total_pages_seen {
                prop_assert_eq!(result.total_pages, expected);
            }
            total_pages_seen = Some(result.total_pages);

            gathered.extend(result.records);
            if page >= result.total_pages {
                break;
            }
            page += 1;
        }

        // No duplicates, no gaps: the concatenation is the full set.
        prop_assert_eq!(gathered, full.records);
    }

    #[test]
    fn page_beyond_the_end_is_empty(page in 1000usize..1100) {
        let records = DemoData::with_defaults().records();
        let result = records.list(&RecordQuery {
            page,
            page_size: 10,
            ..RecordQuery::default()
        });
        prop_assert!(result.records.is_empty());
        prop_assert!(result.total_pages >= 1);
    }
}
