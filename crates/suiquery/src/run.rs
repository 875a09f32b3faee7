use crate::cli::*;

/// Runs one invocation: lists the catalog, prints a request, or sends it
/// and prints the result.
pub async fn run(args: Cli) -> Result<()> {
    if args.list {
        for entry in catalog() {
            println!("{}", describe_entry(entry));
        }
        return Ok(());
    }

    let entry = find_builder(args.builder.as_deref().unwrap_or_default())?;
    let call = entry.prepare(parse_arguments(&args.args))?;
    let client = SuiRpcClient::new(ClientConfig::try_from(&args)?);

    if args.dry_run {
        let envelope = serde_json::to_value(client.envelope(&call)?)
            .map_err(Error::invalid_rpc_request)?;
        println!("{:#}", envelope);
        return Ok(());
    }

    info!("Sending `{}` to {}", call.method(), client.config().rpc_url());
    let raw = client.call(&call).await?;
    entry.verify(&raw)?;
    println!("{:#}", raw);
    Ok(())
}

/// One line per builder, e.g.
/// `GetObject  sui_getObject(object_id: ObjectId, options?: Map) -> factory`
fn describe_entry(entry: &CatalogEntry) -> String {
    let params = entry
        .params()
        .iter()
        .map(describe_param)
        .collect::<Vec<_>>()
        .join(", ");
    let keyed = if entry.convention().is_keyed() {
        " [keyed]"
    } else {
        ""
    };
    format!(
        "{:<30} {}({}) -> {}{}",
        entry.name(),
        entry.method(),
        params,
        entry.entry_point(),
        keyed
    )
}

fn describe_param(param: &ParamDescriptor) -> String {
    let name = param.name();
    let kind = param.kind();
    match param.default() {
        ParamDefault::Required => format!("{}: {}", name, kind),
        ParamDefault::Absent => format!("{}?: {}", name, kind),
        ParamDefault::String(s) => format!("{}: {} = \"{}\"", name, kind, s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn describe_get_object() {
        let entry = find_builder("GetObject").unwrap();
        assert_eq!(
            describe_entry(entry),
            format!(
                "{:<30} sui_getObject(object_id: ObjectId, options?: Map) -> factory",
                "GetObject"
            )
        );
    }

    #[test]
    fn describe_keyed_with_default() {
        assert!(describe_entry(find_builder("QueryEvents").unwrap()).ends_with("[keyed]"));
        assert!(describe_entry(find_builder("GetCoins").unwrap())
            .contains("coin_type: String = \"0x2::sui::SUI\""));
    }

    #[tokio::test]
    async fn unknown_builder() {
        let args = Cli::try_parse_from(["suiquery", "-d", "GetNothing"]).unwrap();
        assert!(run(args).await.unwrap_err().is_unknown_builder());
    }

    #[tokio::test]
    async fn dry_run_validates_before_sending() {
        let args = Cli::try_parse_from(["suiquery", "-d", "GetObject", "object_id=5"]).unwrap();
        assert!(run(args).await.unwrap_err().is_validation_error());
    }

    #[tokio::test]
    async fn dry_run_prints_without_sending() {
        let args = Cli::try_parse_from([
            "suiquery",
            "-u",
            "http://127.0.0.1:1",
            "-d",
            "GetObject",
            "object_id=0x5",
        ])
        .unwrap();
        assert!(run(args).await.is_ok());
    }
}
